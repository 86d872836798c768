use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, audit_log::PaginatedAuditLogsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::audit_log::GetAuditLogsParam,
        service::audit_log::AuditLogService,
        state::AppState,
    },
};

/// Tag for grouping audit log endpoints in OpenAPI documentation
pub static AUDIT_LOG_TAG: &str = "audit-log";

#[derive(Deserialize)]
pub struct AuditLogQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub vehicle_id: Option<i32>,
}

fn default_entries() -> u64 {
    10
}

/// Browse the change history, newest first.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    get,
    path = "/api/audit-logs",
    tag = AUDIT_LOG_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("vehicle_id" = Option<i32>, Query, description = "Only entries for this vehicle")
    ),
    responses(
        (status = 200, description = "Page of audit entries", body = PaginatedAuditLogsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_audit_logs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<AuditLogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    let logs = AuditLogService::new(&state.db)
        .get_paginated(GetAuditLogsParam {
            page: params.page,
            per_page: params.entries.max(1),
            vehicle_id: params.vehicle_id,
        })
        .await?;

    Ok((StatusCode::OK, Json(logs.into_dto())))
}
