//! Damage report domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::damage_report::{CreateDamageReportDto, DamageReportDto, UpdateDamageReportDto},
    server::{
        error::validation::ValidationError,
        util::{
            parse::{non_blank, optional_text, parse_optional_cost, require_text},
            time::parse_optional_datetime,
        },
    },
};

/// Repair progress of a reported damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageStatus {
    Reported,
    InProgress,
    Repaired,
}

impl DamageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reported => "reported",
            Self::InProgress => "in_progress",
            Self::Repaired => "repaired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "reported" => Some(Self::Reported),
            "in_progress" => Some(Self::InProgress),
            "repaired" => Some(Self::Repaired),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DamageReport {
    pub id: i32,
    pub vehicle_id: i32,
    pub date: DateTime<Utc>,
    pub description: String,
    pub status: DamageStatus,
    /// Paths or URLs of photos documenting the damage.
    pub images: Vec<String>,
    pub repair_cost: Option<f64>,
    pub repaired_date: Option<DateTime<Utc>>,
}

impl DamageReport {
    pub fn into_dto(self) -> DamageReportDto {
        DamageReportDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            date: self.date,
            description: self.description,
            status: self.status.as_str().to_string(),
            images: self.images,
            repair_cost: self.repair_cost,
            repaired_date: self.repaired_date,
        }
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// Non-string entries in the stored image list are skipped.
    pub fn from_entity(entity: entity::damage_report::Model) -> Result<Self, DbErr> {
        let status = DamageStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown status stored for damage report {}: {}",
                entity.id, entity.status
            ))
        })?;

        let images = entity
            .images
            .as_ref()
            .and_then(|value| value.as_array())
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            date: entity.date,
            description: entity.description,
            status,
            images,
            repair_cost: entity.repair_cost,
            repaired_date: entity.repaired_date,
        })
    }
}

/// Parameters for filing a damage report. New reports start as reported.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDamageReportParam {
    pub vehicle_id: i32,
    pub date: DateTime<Utc>,
    pub description: String,
    pub images: Vec<String>,
    pub repair_cost: Option<f64>,
}

impl CreateDamageReportParam {
    pub fn from_dto(
        vehicle_id: i32,
        dto: CreateDamageReportDto,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            vehicle_id,
            date: parse_optional_datetime("date", dto.date.as_deref())?.unwrap_or(now),
            description: require_text("description", dto.description)?,
            images: dto.images,
            repair_cost: parse_optional_cost("repair_cost", dto.repair_cost.as_ref())?,
        })
    }
}

/// Parameters for updating a damage report. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDamageReportParam {
    pub description: Option<String>,
    pub status: Option<DamageStatus>,
    pub images: Option<Vec<String>>,
    pub repair_cost: Option<f64>,
    pub repaired_date: Option<DateTime<Utc>>,
}

impl UpdateDamageReportParam {
    /// Validates an update. Marking a report repaired without a date records `now`.
    pub fn from_dto(
        dto: UpdateDamageReportDto,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let status = optional_text(dto.status)
            .map(|status| {
                DamageStatus::parse(&status).ok_or(ValidationError::UnknownValue {
                    field: "status",
                    value: status,
                })
            })
            .transpose()?;

        let mut repaired_date =
            parse_optional_datetime("repaired_date", dto.repaired_date.as_deref())?;
        if status == Some(DamageStatus::Repaired) && repaired_date.is_none() {
            repaired_date = Some(now);
        }

        Ok(Self {
            description: dto
                .description
                .map(|d| non_blank("description", d))
                .transpose()?,
            status,
            images: dto.images,
            repair_cost: parse_optional_cost("repair_cost", dto.repair_cost.as_ref())?,
            repaired_date,
        })
    }
}
