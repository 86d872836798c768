use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::vehicle::{CreateVehicleParam, UpdateVehicleParam},
        service::vehicle::VehicleService,
        state::AppState,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

/// List all vehicles.
///
/// # Access Control
/// - Any logged-in user
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "All vehicles ordered by ID", body = Vec<VehicleDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vehicles = VehicleService::new(&state.db, &state.images)
        .get_all()
        .await?;

    let vehicles: Vec<VehicleDto> = vehicles.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a single vehicle.
#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "The vehicle", body = VehicleDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let vehicle = VehicleService::new(&state.db, &state.images)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Add a vehicle to the fleet.
///
/// Without an explicit image URL a picture of the model is looked up.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    let param = CreateVehicleParam::from_dto(payload)?;

    let vehicle = VehicleService::new(&state.db, &state.images)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

/// Update a vehicle.
///
/// Changing the model looks up a new image unless the request sets one.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleDto),
        (status = 400, description = "Invalid vehicle data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVehicleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    let param = UpdateVehicleParam::from_dto(payload)?;

    let vehicle = VehicleService::new(&state.db, &state.images)
        .update(id, param)
        .await?;

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Remove a vehicle from the fleet.
///
/// Vehicles still referenced by bookings, logbook entries or documents are kept.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Vehicle deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Vehicle still referenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    VehicleService::new(&state.db, &state.images)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download all vehicles as CSV.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    get,
    path = "/api/vehicles/export",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "CSV file with one row per vehicle", body = String, content_type = "text/csv"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_vehicles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    let csv = VehicleService::new(&state.db, &state.images)
        .export_csv()
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"vehicles.csv\""),
        ],
        csv,
    ))
}
