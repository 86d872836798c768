use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        damage_report::{CreateDamageReportDto, DamageReportDto, UpdateDamageReportDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::damage_report::{CreateDamageReportParam, UpdateDamageReportParam},
        service::damage_report::DamageReportService,
        state::AppState,
    },
};

/// Tag for grouping damage report endpoints in OpenAPI documentation
pub static DAMAGE_REPORT_TAG: &str = "damage-report";

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/damage-reports",
    tag = DAMAGE_REPORT_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Damage reports, newest first", body = Vec<DamageReportDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_damage_reports(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reports = DamageReportService::new(&state.db)
        .get_by_vehicle(vehicle_id)
        .await?;

    let reports: Vec<DamageReportDto> = reports.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(reports)))
}

/// File a damage report for a vehicle.
///
/// # Access Control
/// - `BookVehicles`
#[utoipa::path(
    post,
    path = "/api/vehicles/{id}/damage-reports",
    tag = DAMAGE_REPORT_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = CreateDamageReportDto,
    responses(
        (status = 201, description = "Damage reported", body = DamageReportDto),
        (status = 400, description = "Invalid report data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_damage_report(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
    Json(payload): Json<CreateDamageReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BookVehicles])
        .await?;

    let param = CreateDamageReportParam::from_dto(vehicle_id, payload, Utc::now())?;

    let report = DamageReportService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(report.into_dto())))
}

/// Update a damage report, e.g. to track the repair.
///
/// Setting the status to repaired without a repair date records the current time.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    put,
    path = "/api/damage-reports/{id}",
    tag = DAMAGE_REPORT_TAG,
    params(("id" = i32, Path, description = "Damage report ID")),
    request_body = UpdateDamageReportDto,
    responses(
        (status = 200, description = "Damage report updated", body = DamageReportDto),
        (status = 400, description = "Invalid report data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Damage report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_damage_report(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDamageReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    let param = UpdateDamageReportParam::from_dto(payload, Utc::now())?;

    let report = DamageReportService::new(&state.db)
        .update(id, param)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/damage-reports/{id}",
    tag = DAMAGE_REPORT_TAG,
    params(("id" = i32, Path, description = "Damage report ID")),
    responses(
        (status = 204, description = "Damage report deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Damage report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_damage_report(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    DamageReportService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
