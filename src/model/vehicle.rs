use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::NumberInput;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub model: String,
    pub license_plate: String,
    pub image: Option<String>,
    pub status: String,
    pub odometer: i32,
    pub fuel_level: i32,
    pub last_service: Option<DateTime<Utc>>,
    pub next_service: Option<DateTime<Utc>>,
    pub inspection_due: Option<NaiveDate>,
    pub emissions_test_due: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateVehicleDto {
    pub model: Option<String>,
    pub license_plate: Option<String>,
    /// Explicit image URL; looked up from the model name when absent.
    pub image: Option<String>,
    pub status: Option<String>,
    pub odometer: Option<NumberInput>,
    pub fuel_level: Option<NumberInput>,
    pub inspection_due: Option<String>, // Format: "YYYY-MM-DD"
    pub emissions_test_due: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateVehicleDto {
    pub model: Option<String>,
    pub license_plate: Option<String>,
    pub image: Option<String>,
    pub status: Option<String>,
    pub odometer: Option<NumberInput>,
    pub fuel_level: Option<NumberInput>,
    pub next_service: Option<String>,
    pub inspection_due: Option<String>,
    pub emissions_test_due: Option<String>,
}
