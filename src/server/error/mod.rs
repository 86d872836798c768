//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. Domain errors carry
//! their own response mapping; everything unexpected becomes a logged 500 with a generic body.

pub mod auth;
pub mod config;
pub mod internal;
pub mod statistics;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError,
        statistics::StatisticsError, validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Most variants use `#[from]` so `?` converts domain and library errors automatically.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error, mapped to 401/403/404 by `AuthError`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejected request input, always 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Statistics aggregation aborted, always a generic 500.
    #[error(transparent)]
    StatisticsErr(#[from] StatisticsError),

    /// Unexpected internal failure.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client construction or request error.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found, 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request that is not a field validation issue, 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing data (restricted delete, duplicate email), 409.
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest` and `ValidationErr`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict`
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else, with details only in the log
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::StatisticsErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 Internal Server Error.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
