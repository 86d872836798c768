//! User data repository for database operations.
//!
//! Stores users with their bcrypt password hash. Permission flags are persisted as a JSON
//! object only when explicitly assigned; otherwise the column stays empty and the flags are
//! derived from the role.

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Validated user fields; the plain-text password is ignored
    /// - `password_hash` - Bcrypt hash of the password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on the email
    pub async fn create(
        &self,
        param: CreateUserParam,
        password_hash: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(password_hash),
            department: ActiveValue::Set(param.department),
            building: ActiveValue::Set(param.building),
            permissions: ActiveValue::Set(param.permissions.map(|p| p.to_json())),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error or unreadable stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email address. Emails are stored lowercase.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets all users ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Updates the given fields of a user.
    ///
    /// # Arguments
    /// - `id` - ID of the user to update
    /// - `param` - Fields to change; `None` keeps the stored value
    /// - `password_hash` - New password hash when the password changes
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(
        &self,
        id: i32,
        param: UpdateUserParam,
        password_hash: Option<String>,
    ) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(role) = param.role {
            active_model.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(department) = param.department {
            active_model.department = ActiveValue::Set(Some(department));
        }
        if let Some(building) = param.building {
            active_model.building = ActiveValue::Set(Some(building));
        }
        if let Some(permissions) = param.permissions {
            active_model.permissions = ActiveValue::Set(Some(permissions.to_json()));
        }
        if let Some(password_hash) = password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }

        User::from_entity(active_model.update(self.db).await?)
    }

    /// Deletes a user. Deleting a missing user is not an error.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
