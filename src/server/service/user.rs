use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
    service::auth::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by name
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Creates a user with a freshly hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already in use
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        self.ensure_email_available(&param.email, None).await?;

        let password_hash = hash_password(&param.password)?;

        Ok(repo.create(param, password_hash).await?)
    }

    /// Updates a user, re-hashing the password when a new one is given
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        if let Some(email) = &param.email {
            self.ensure_email_available(email, Some(id)).await?;
        }

        let password_hash = param.password.as_deref().map(hash_password).transpose()?;

        Ok(repo.update(id, param, password_hash).await?)
    }

    /// Deletes a user without bookings
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - User still has bookings
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        let bookings = BookingRepository::new(self.db).count_by_user(id).await?;
        if bookings > 0 {
            return Err(AppError::Conflict(format!(
                "User {} still has {} booking(s)",
                id, bookings
            )));
        }

        repo.delete(id).await?;

        Ok(())
    }

    async fn ensure_email_available(
        &self,
        email: &str,
        except_user: Option<i32>,
    ) -> Result<(), AppError> {
        let existing = UserRepository::new(self.db).find_by_email(email).await?;

        match existing {
            Some(user) if Some(user.id) != except_user => Err(AppError::Conflict(format!(
                "Email {} is already registered",
                email
            ))),
            _ => Ok(()),
        }
    }
}
