use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::NumberInput;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MaintenanceRecordDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub date: DateTime<Utc>,
    pub description: String,
    pub cost: f64,
    pub odometer: Option<i32>,
    pub performed_by: Option<String>,
    pub kind: Option<String>,
}

/// Body of maintenance create and update requests.
///
/// On update, absent fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct MaintenanceRecordInputDto {
    pub date: Option<String>,
    pub description: Option<String>,
    pub cost: Option<NumberInput>,
    pub odometer: Option<NumberInput>,
    pub performed_by: Option<String>,
    /// "Routinewartung", "Reparatur", "Inspektion" or any other label.
    pub kind: Option<String>,
}
