use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, ReturnBookingDto, UpdateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::{CreateBookingParam, ReturnBookingParam},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// List bookings, latest start first.
///
/// Users who can approve requests see every booking; everyone else only their own.
///
/// # Access Control
/// - `BookVehicles`
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Visible bookings", body = Vec<BookingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BookVehicles])
        .await?;

    let bookings = BookingService::new(&state.db).get_all(&user).await?;

    let bookings: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings)))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BookVehicles])
        .await?;

    let booking = BookingService::new(&state.db).get_by_id(id, &user).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Request a vehicle for a time window.
///
/// The booking is made for the logged-in user unless `user_id` names someone else, which
/// requires `ApproveRequests`.
///
/// # Access Control
/// - `BookVehicles`
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking requested", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BookVehicles])
        .await?;

    let param = CreateBookingParam::from_dto(payload, user.id)?;

    let booking = BookingService::new(&state.db).create(param, &user).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Change a booking that is still waiting for approval.
///
/// # Access Control
/// - `BookVehicles`
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Booking updated", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking or vehicle not found", body = ErrorDto),
        (status = 409, description = "Booking already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BookVehicles])
        .await?;

    let booking = BookingService::new(&state.db)
        .update(id, payload, &user)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BookVehicles])
        .await?;

    BookingService::new(&state.db).delete(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Accept a pending booking request. The vehicle is marked as booked.
///
/// # Access Control
/// - `ApproveRequests`
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/approve",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking accepted", body = BookingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking is no longer requested", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApproveRequests])
        .await?;

    let booking = BookingService::new(&state.db).approve(id, &user).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Reject a pending booking request.
///
/// # Access Control
/// - `ApproveRequests`
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/reject",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking rejected", body = BookingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking is no longer requested", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApproveRequests])
        .await?;

    let booking = BookingService::new(&state.db).reject(id, &user).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Hand the vehicle of an accepted booking back.
///
/// Odometer and fuel readings are applied to the vehicle, which becomes available again.
/// Reported damage is filed as an open damage report.
///
/// # Access Control
/// - `BookVehicles`
#[utoipa::path(
    post,
    path = "/api/bookings/{id}/return",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = ReturnBookingDto,
    responses(
        (status = 200, description = "Vehicle returned", body = BookingDto),
        (status = 400, description = "Invalid readings", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking not accepted or already returned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn return_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReturnBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BookVehicles])
        .await?;

    let param = ReturnBookingParam::from_dto(payload)?;

    let booking = BookingService::new(&state.db)
        .return_vehicle(id, param, &user)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
