use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure while building the statistics report.
///
/// The whole report is discarded; clients only ever see a generic 500.
#[derive(Error, Debug)]
pub enum StatisticsError {
    /// A query for one section of the report failed.
    #[error("Failed to aggregate {section}: {source}")]
    QueryFailed {
        /// Report section whose query failed
        section: &'static str,
        #[source]
        source: DbErr,
    },
}

impl StatisticsError {
    /// Returns a closure wrapping a `DbErr` for `section`, for use with `map_err`.
    pub fn query_failed(section: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::QueryFailed { section, source }
    }
}

impl IntoResponse for StatisticsError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Failed to generate statistics".to_string(),
            }),
        )
            .into_response()
    }
}
