use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request input rejected before any write reaches the database.
///
/// Always results in 400 Bad Request carrying the error message.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Field '{field}' is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{field}' must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("Field '{field}' must be greater than zero, got {value}")]
    NonPositiveAmount { field: &'static str, value: f64 },

    #[error("Field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Field '{field}' is not a valid date: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("End time must not be before start time")]
    InvalidTimeRange,

    #[error("Unknown value '{value}' for field '{field}'")]
    UnknownValue { field: &'static str, value: String },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
