//! Email/password authentication.
//!
//! Passwords are stored as bcrypt hashes. The session itself is handled by the controller
//! through `AuthSession`; this service only resolves credentials to users.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
};

/// Hashes a plain-text password with the default bcrypt cost.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(AuthError::from)?)
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new employee account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, param: CreateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                param.email
            )));
        }

        let password_hash = hash_password(&param.password)?;
        let user = repo.create(param, password_hash).await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = bcrypt::verify(password, &user.password_hash).map_err(AuthError::from)?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
