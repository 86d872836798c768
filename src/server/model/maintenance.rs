//! Maintenance record domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::maintenance::{MaintenanceRecordDto, MaintenanceRecordInputDto},
    server::{
        error::validation::ValidationError,
        util::{
            parse::{non_blank, optional_text, parse_cost, parse_whole_number, require_text},
            time::parse_optional_datetime,
        },
    },
};

/// Kind of maintenance work.
///
/// The set is open: labels other than the three known kinds are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaintenanceKind {
    Routine,
    Repair,
    Inspection,
    Other(String),
}

impl MaintenanceKind {
    pub const INSPECTION: &'static str = "Inspektion";

    pub fn as_str(&self) -> &str {
        match self {
            Self::Routine => "Routinewartung",
            Self::Repair => "Reparatur",
            Self::Inspection => Self::INSPECTION,
            Self::Other(label) => label,
        }
    }
}

impl From<String> for MaintenanceKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Routinewartung" => Self::Routine,
            "Reparatur" => Self::Repair,
            Self::INSPECTION => Self::Inspection,
            _ => Self::Other(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    pub id: i32,
    pub vehicle_id: i32,
    pub date: DateTime<Utc>,
    pub description: String,
    pub cost: f64,
    /// Odometer reading at the time of service.
    pub odometer: Option<i32>,
    pub performed_by: Option<String>,
    pub kind: Option<MaintenanceKind>,
}

impl MaintenanceRecord {
    pub fn into_dto(self) -> MaintenanceRecordDto {
        MaintenanceRecordDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            date: self.date,
            description: self.description,
            cost: self.cost,
            odometer: self.odometer,
            performed_by: self.performed_by,
            kind: self.kind.map(|k| k.as_str().to_string()),
        }
    }

    pub fn from_entity(entity: entity::maintenance_record::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            date: entity.date,
            description: entity.description,
            cost: entity.cost,
            odometer: entity.odometer,
            performed_by: entity.performed_by,
            kind: entity.kind.map(MaintenanceKind::from),
        }
    }
}

/// Complete set of writable maintenance fields, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecordParam {
    pub date: DateTime<Utc>,
    pub description: String,
    pub cost: f64,
    pub odometer: Option<i32>,
    pub performed_by: Option<String>,
    pub kind: Option<MaintenanceKind>,
}

impl MaintenanceRecordParam {
    /// Validates a create request. The date defaults to `now` and the cost to 0.
    pub fn from_dto(
        dto: MaintenanceRecordInputDto,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            date: parse_optional_datetime("date", dto.date.as_deref())?.unwrap_or(now),
            description: require_text("description", dto.description)?,
            cost: parse_cost("cost", dto.cost.as_ref())?,
            odometer: parse_whole_number("odometer", dto.odometer.as_ref())?,
            performed_by: optional_text(dto.performed_by),
            kind: optional_text(dto.kind).map(MaintenanceKind::from),
        })
    }

    /// Validates an update request, keeping stored values for absent fields.
    pub fn merge_dto(
        dto: MaintenanceRecordInputDto,
        existing: &MaintenanceRecord,
    ) -> Result<Self, ValidationError> {
        let cost = match dto.cost {
            Some(ref cost) => parse_cost("cost", Some(cost))?,
            None => existing.cost,
        };

        Ok(Self {
            date: parse_optional_datetime("date", dto.date.as_deref())?.unwrap_or(existing.date),
            description: match dto.description {
                Some(description) => non_blank("description", description)?,
                None => existing.description.clone(),
            },
            cost,
            odometer: parse_whole_number("odometer", dto.odometer.as_ref())?.or(existing.odometer),
            performed_by: optional_text(dto.performed_by).or_else(|| existing.performed_by.clone()),
            kind: optional_text(dto.kind)
                .map(MaintenanceKind::from)
                .or_else(|| existing.kind.clone()),
        })
    }
}
