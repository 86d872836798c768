use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::NumberInput;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DamageReportDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub date: DateTime<Utc>,
    pub description: String,
    pub status: String,
    pub images: Vec<String>,
    pub repair_cost: Option<f64>,
    pub repaired_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateDamageReportDto {
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub repair_cost: Option<NumberInput>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateDamageReportDto {
    pub description: Option<String>,
    /// "reported", "in_progress" or "repaired".
    pub status: Option<String>,
    pub images: Option<Vec<String>>,
    pub repair_cost: Option<NumberInput>,
    pub repaired_date: Option<String>,
}
