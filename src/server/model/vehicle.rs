//! Vehicle domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    server::{
        error::validation::ValidationError,
        util::{
            parse::{non_blank, optional_text, parse_percentage, parse_whole_number, require_text},
            time::{parse_optional_date, parse_optional_datetime},
        },
    },
};

/// Availability of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Available,
    Booked,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "available" => Some(Self::Available),
            "booked" => Some(Self::Booked),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    fn from_input(value: Option<String>) -> Result<Option<Self>, ValidationError> {
        optional_text(value)
            .map(|status| {
                Self::parse(&status).ok_or(ValidationError::UnknownValue {
                    field: "status",
                    value: status,
                })
            })
            .transpose()
    }
}

/// A fleet vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    /// Model name including the brand, e.g. "VW Golf".
    pub model: String,
    pub license_plate: String,
    pub image: Option<String>,
    pub status: VehicleStatus,
    /// Odometer reading in kilometers.
    pub odometer: i32,
    /// Fuel level in percent.
    pub fuel_level: i32,
    pub last_service: Option<DateTime<Utc>>,
    pub next_service: Option<DateTime<Utc>>,
    /// Due date of the general inspection (TÜV).
    pub inspection_due: Option<NaiveDate>,
    /// Due date of the emissions test (AU).
    pub emissions_test_due: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Brand of the vehicle, the first whitespace-delimited token of the model name.
    pub fn brand(&self) -> Option<&str> {
        brand_of(&self.model)
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            model: self.model,
            license_plate: self.license_plate,
            image: self.image,
            status: self.status.as_str().to_string(),
            odometer: self.odometer,
            fuel_level: self.fuel_level,
            last_service: self.last_service,
            next_service: self.next_service,
            inspection_due: self.inspection_due,
            emissions_test_due: self.emissions_test_due,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a vehicle domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The converted vehicle
    /// - `Err(DbErr::Custom)` - Stored status is not a known vehicle status
    pub fn from_entity(entity: entity::vehicle::Model) -> Result<Self, DbErr> {
        let status = VehicleStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown status stored for vehicle {}: {}",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            model: entity.model,
            license_plate: entity.license_plate,
            image: entity.image,
            status,
            odometer: entity.odometer,
            fuel_level: entity.fuel_level,
            last_service: entity.last_service,
            next_service: entity.next_service,
            inspection_due: entity.inspection_due,
            emissions_test_due: entity.emissions_test_due,
            created_at: entity.created_at,
        })
    }
}

/// First whitespace-delimited token of a model name.
pub fn brand_of(model: &str) -> Option<&str> {
    model.split_whitespace().next()
}

/// Parameters for creating a vehicle.
#[derive(Debug, Clone)]
pub struct CreateVehicleParam {
    pub model: String,
    pub license_plate: String,
    /// Explicit image URL; resolved by the image lookup when `None`.
    pub image: Option<String>,
    pub status: VehicleStatus,
    pub odometer: i32,
    pub fuel_level: i32,
    pub inspection_due: Option<NaiveDate>,
    pub emissions_test_due: Option<NaiveDate>,
}

impl CreateVehicleParam {
    /// Validates a create request. Status defaults to available, odometer to 0 and the
    /// fuel level to a full tank.
    pub fn from_dto(dto: CreateVehicleDto) -> Result<Self, ValidationError> {
        Ok(Self {
            model: require_text("model", dto.model)?,
            license_plate: require_text("license_plate", dto.license_plate)?,
            image: optional_text(dto.image),
            status: VehicleStatus::from_input(dto.status)?.unwrap_or(VehicleStatus::Available),
            odometer: parse_whole_number("odometer", dto.odometer.as_ref())?.unwrap_or(0),
            fuel_level: parse_percentage("fuel_level", dto.fuel_level.as_ref())?.unwrap_or(100),
            inspection_due: parse_optional_date("inspection_due", dto.inspection_due.as_deref())?,
            emissions_test_due: parse_optional_date(
                "emissions_test_due",
                dto.emissions_test_due.as_deref(),
            )?,
        })
    }
}

/// Parameters for updating a vehicle. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateVehicleParam {
    pub model: Option<String>,
    pub license_plate: Option<String>,
    pub image: Option<String>,
    pub status: Option<VehicleStatus>,
    pub odometer: Option<i32>,
    pub fuel_level: Option<i32>,
    pub next_service: Option<DateTime<Utc>>,
    pub inspection_due: Option<NaiveDate>,
    pub emissions_test_due: Option<NaiveDate>,
}

impl UpdateVehicleParam {
    pub fn from_dto(dto: UpdateVehicleDto) -> Result<Self, ValidationError> {
        Ok(Self {
            model: dto.model.map(|m| non_blank("model", m)).transpose()?,
            license_plate: dto
                .license_plate
                .map(|p| non_blank("license_plate", p))
                .transpose()?,
            image: optional_text(dto.image),
            status: VehicleStatus::from_input(dto.status)?,
            odometer: parse_whole_number("odometer", dto.odometer.as_ref())?,
            fuel_level: parse_percentage("fuel_level", dto.fuel_level.as_ref())?,
            next_service: parse_optional_datetime("next_service", dto.next_service.as_deref())?,
            inspection_due: parse_optional_date("inspection_due", dto.inspection_due.as_deref())?,
            emissions_test_due: parse_optional_date(
                "emissions_test_due",
                dto.emissions_test_due.as_deref(),
            )?,
        })
    }
}
