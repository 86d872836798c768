//! HTTP routing and OpenAPI documentation.
//!
//! Every endpoint is registered with its utoipa path annotation so the generated document
//! stays in sync with the handlers. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the API router with Swagger UI.
///
/// Handlers sharing a path are registered together in one `routes!` call.
///
/// # Returns
/// A `Router<AppState>` that still needs its state and the session layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Fuhrpark", description = "Fleet management API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration, login and session"),
        (name = controller::user::USER_TAG, description = "User administration"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle inventory"),
        (name = controller::booking::BOOKING_TAG, description = "Booking requests and returns"),
        (name = controller::maintenance::MAINTENANCE_TAG, description = "Service history"),
        (name = controller::fuel_log::FUEL_LOG_TAG, description = "Refueling log"),
        (name = controller::damage_report::DAMAGE_REPORT_TAG, description = "Damage reports"),
        (name = controller::document::DOCUMENT_TAG, description = "Vehicle documents"),
        (name = controller::audit_log::AUDIT_LOG_TAG, description = "Change history"),
        (name = controller::statistics::STATISTICS_TAG, description = "Dashboard statistics"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_current_user))
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::vehicle::get_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(controller::vehicle::export_vehicles))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(
            controller::booking::get_bookings,
            controller::booking::create_booking
        ))
        .routes(routes!(
            controller::booking::get_booking,
            controller::booking::update_booking,
            controller::booking::delete_booking
        ))
        .routes(routes!(controller::booking::approve_booking))
        .routes(routes!(controller::booking::reject_booking))
        .routes(routes!(controller::booking::return_booking))
        .routes(routes!(
            controller::maintenance::get_maintenance_records,
            controller::maintenance::create_maintenance_record
        ))
        .routes(routes!(
            controller::maintenance::update_maintenance_record,
            controller::maintenance::delete_maintenance_record
        ))
        .routes(routes!(
            controller::fuel_log::get_fuel_logs,
            controller::fuel_log::create_fuel_log
        ))
        .routes(routes!(
            controller::fuel_log::update_fuel_log,
            controller::fuel_log::delete_fuel_log
        ))
        .routes(routes!(
            controller::damage_report::get_damage_reports,
            controller::damage_report::create_damage_report
        ))
        .routes(routes!(
            controller::damage_report::update_damage_report,
            controller::damage_report::delete_damage_report
        ))
        .routes(routes!(
            controller::document::get_documents,
            controller::document::upload_document
        ))
        .routes(routes!(controller::document::delete_document))
        .routes(routes!(controller::audit_log::get_audit_logs))
        .routes(routes!(controller::statistics::get_statistics))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
