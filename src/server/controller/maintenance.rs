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
        maintenance::{MaintenanceRecordDto, MaintenanceRecordInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::maintenance::MaintenanceRecordParam,
        service::maintenance::MaintenanceService,
        state::AppState,
    },
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

/// Service history of a vehicle, newest first.
///
/// # Access Control
/// - Any logged-in user
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/maintenance",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Maintenance records", body = Vec<MaintenanceRecordDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_records(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let records = MaintenanceService::new(&state.db)
        .get_by_vehicle(vehicle_id)
        .await?;

    let records: Vec<MaintenanceRecordDto> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(records)))
}

/// Record a service visit.
///
/// Updates the vehicle's last service date and odometer and writes an audit entry.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    post,
    path = "/api/vehicles/{id}/maintenance",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = MaintenanceRecordInputDto,
    responses(
        (status = 201, description = "Record created", body = MaintenanceRecordDto),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_maintenance_record(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
    Json(payload): Json<MaintenanceRecordInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    let param = MaintenanceRecordParam::from_dto(payload, Utc::now())?;

    let record = MaintenanceService::new(&state.db)
        .create(vehicle_id, param, &user)
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// Update a service record. Absent fields keep their stored value.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    put,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Maintenance record ID")),
    request_body = MaintenanceRecordInputDto,
    responses(
        (status = 200, description = "Record updated", body = MaintenanceRecordDto),
        (status = 400, description = "Invalid record data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_maintenance_record(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<MaintenanceRecordInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    let record = MaintenanceService::new(&state.db)
        .update(id, payload, &user)
        .await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Maintenance record ID")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_maintenance_record(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    MaintenanceService::new(&state.db).delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
