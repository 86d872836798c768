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
        fuel_log::{FuelLogDto, FuelLogInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::fuel_log::FuelLogParam,
        service::fuel_log::FuelLogService,
        state::AppState,
    },
};

/// Tag for grouping fuel log endpoints in OpenAPI documentation
pub static FUEL_LOG_TAG: &str = "fuel-log";

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/fuel-logs",
    tag = FUEL_LOG_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Refuelings, newest first", body = Vec<FuelLogDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fuel_logs(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let logs = FuelLogService::new(&state.db)
        .get_by_vehicle(vehicle_id)
        .await?;

    let logs: Vec<FuelLogDto> = logs.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(logs)))
}

/// Log a refueling. A recorded odometer reading is applied to the vehicle.
///
/// # Access Control
/// - `BookVehicles`
#[utoipa::path(
    post,
    path = "/api/vehicles/{id}/fuel-logs",
    tag = FUEL_LOG_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = FuelLogInputDto,
    responses(
        (status = 201, description = "Refueling logged", body = FuelLogDto),
        (status = 400, description = "Invalid fuel data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fuel_log(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
    Json(payload): Json<FuelLogInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BookVehicles])
        .await?;

    let param = FuelLogParam::from_dto(payload, Utc::now())?;

    let log = FuelLogService::new(&state.db)
        .create(vehicle_id, param)
        .await?;

    Ok((StatusCode::CREATED, Json(log.into_dto())))
}

/// Correct a refueling entry. Absent fields keep their stored value.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    put,
    path = "/api/fuel-logs/{id}",
    tag = FUEL_LOG_TAG,
    params(("id" = i32, Path, description = "Fuel log ID")),
    request_body = FuelLogInputDto,
    responses(
        (status = 200, description = "Refueling updated", body = FuelLogDto),
        (status = 400, description = "Invalid fuel data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Fuel log not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fuel_log(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<FuelLogInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    let log = FuelLogService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(log.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/fuel-logs/{id}",
    tag = FUEL_LOG_TAG,
    params(("id" = i32, Path, description = "Fuel log ID")),
    responses(
        (status = 204, description = "Refueling deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Fuel log not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fuel_log(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    FuelLogService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
