use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::NumberInput;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FuelLogDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub date: DateTime<Utc>,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_cost: f64,
    pub odometer: i32,
    pub fuel_type: String,
}

/// Body of fuel log create and update requests. The total cost is always computed.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct FuelLogInputDto {
    pub date: Option<String>,
    pub liters: Option<NumberInput>,
    pub price_per_liter: Option<NumberInput>,
    pub odometer: Option<NumberInput>,
    pub fuel_type: Option<String>,
}
