//! Request authorization.
//!
//! Every protected handler builds an [`AuthGuard`] from its database connection and session
//! and calls [`AuthGuard::require`] with the permissions the endpoint needs. The returned
//! [`User`] is the principal of the request and is passed on explicitly.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Capability an endpoint may demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    BookVehicles,
    ViewStatistics,
    ManageVehicles,
    ApproveRequests,
    /// Requires the Admin role itself, regardless of stored flags.
    Admin,
}

impl Permission {
    fn is_granted_to(&self, user: &User) -> bool {
        let permissions = user.permissions();

        match self {
            Self::BookVehicles => permissions.book_vehicles,
            Self::ViewStatistics => permissions.view_statistics,
            Self::ManageVehicles => permissions.manage_vehicles,
            Self::ApproveRequests => permissions.approve_requests,
            Self::Admin => user.is_admin(),
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in user and checks every given permission.
    ///
    /// An empty slice only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The principal of the request
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session points to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if let Some(missing) = permissions.iter().find(|p| !p.is_granted_to(&user)) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("User lacks required permission {:?}", missing),
            )
            .into());
        }

        Ok(user)
    }
}
