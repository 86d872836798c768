use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::NumberInput;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub user_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub purpose: String,
    pub vehicle_size: String,
    pub approved_by: Option<i32>,
    pub approved_at: Option<DateTime<Utc>>,
    pub end_odometer: Option<i32>,
    pub end_fuel_level: Option<i32>,
    pub return_notes: Option<String>,
    pub returned_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateBookingDto {
    pub vehicle_id: Option<i32>,
    /// Defaults to the requesting user.
    pub user_id: Option<i32>,
    pub start_time: Option<String>, // RFC 3339 or "YYYY-MM-DDTHH:MM" in UTC
    pub end_time: Option<String>,
    pub purpose: Option<String>,
    pub vehicle_size: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateBookingDto {
    pub vehicle_id: Option<i32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub purpose: Option<String>,
    pub vehicle_size: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ReturnBookingDto {
    pub end_odometer: Option<NumberInput>,
    pub end_fuel_level: Option<NumberInput>,
    /// Free-text damage description, filed as a damage report when not empty.
    pub damages: Option<String>,
    pub notes: Option<String>,
}
