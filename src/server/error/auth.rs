use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session, the request is not logged in.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks a permission required by the endpoint.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied permission for the server log
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or wrong password on login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Hashing or verifying a password failed.
    #[error(transparent)]
    PasswordHash(#[from] bcrypt::BcryptError),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `InvalidCredentials` → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden
/// - `PasswordHash` → 500 Internal Server Error
///
/// Details are logged at debug level; client messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::PasswordHash(err) => {
                tracing::error!("Password hashing failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
