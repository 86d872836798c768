use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, statistics::StatisticsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::statistics::StatisticsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATISTICS_TAG: &str = "statistics";

/// Fleet dashboard figures.
///
/// Aggregates inspection costs for the current year, drive time per vehicle brand,
/// kilometers per vehicle, fuel consumption per fuel type, department usage and a
/// comparison of this month's pickups with last month's.
///
/// # Access Control
/// - `ViewStatistics`
///
/// # Returns
/// - `200 OK` - The complete report
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing permission
/// - `500 Internal Server Error` - Any underlying query failed; no partial report is sent
#[utoipa::path(
    get,
    path = "/api/statistics",
    tag = STATISTICS_TAG,
    responses(
        (status = 200, description = "Statistics report", body = StatisticsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_statistics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewStatistics])
        .await?;

    let report = StatisticsService::new(&state.db)
        .generate(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}
