//! Fuel log domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::fuel_log::{FuelLogDto, FuelLogInputDto},
    server::{
        error::validation::ValidationError,
        util::{
            parse::{optional_text, parse_cost, parse_positive, parse_whole_number},
            time::parse_optional_datetime,
        },
    },
};

/// Fuel type recorded when none is given.
pub const DEFAULT_FUEL_TYPE: &str = "Diesel";

#[derive(Debug, Clone, PartialEq)]
pub struct FuelLog {
    pub id: i32,
    pub vehicle_id: i32,
    pub date: DateTime<Utc>,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_cost: f64,
    pub odometer: i32,
    pub fuel_type: String,
}

impl FuelLog {
    pub fn into_dto(self) -> FuelLogDto {
        FuelLogDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            date: self.date,
            liters: self.liters,
            price_per_liter: self.price_per_liter,
            total_cost: self.total_cost,
            odometer: self.odometer,
            fuel_type: self.fuel_type,
        }
    }

    pub fn from_entity(entity: entity::fuel_log::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            date: entity.date,
            liters: entity.liters,
            price_per_liter: entity.price_per_liter,
            total_cost: entity.total_cost,
            odometer: entity.odometer,
            fuel_type: entity.fuel_type,
        }
    }
}

/// Complete set of writable fuel log fields, used for both create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelLogParam {
    pub date: DateTime<Utc>,
    pub liters: f64,
    pub price_per_liter: f64,
    pub odometer: i32,
    pub fuel_type: String,
}

impl FuelLogParam {
    /// Total cost, always derived from liters and price.
    pub fn total_cost(&self) -> f64 {
        self.liters * self.price_per_liter
    }

    /// Validates a create request. Liters must be positive; the odometer reading is required.
    ///
    /// Unlike the other numeric inputs the odometer has no zero default, since the reading
    /// is copied to the vehicle and a 0 would reset its odometer.
    pub fn from_dto(dto: FuelLogInputDto, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        Ok(Self {
            date: parse_optional_datetime("date", dto.date.as_deref())?.unwrap_or(now),
            liters: parse_positive("liters", dto.liters.as_ref())?,
            price_per_liter: parse_cost("price_per_liter", dto.price_per_liter.as_ref())?,
            odometer: parse_whole_number("odometer", dto.odometer.as_ref())?
                .ok_or(ValidationError::MissingField("odometer"))?,
            fuel_type: optional_text(dto.fuel_type)
                .unwrap_or_else(|| DEFAULT_FUEL_TYPE.to_string()),
        })
    }

    /// Validates an update request, keeping stored values for absent fields.
    pub fn merge_dto(dto: FuelLogInputDto, existing: &FuelLog) -> Result<Self, ValidationError> {
        let liters = match dto.liters {
            Some(ref liters) => parse_positive("liters", Some(liters))?,
            None => existing.liters,
        };
        let price_per_liter = match dto.price_per_liter {
            Some(ref price) => parse_cost("price_per_liter", Some(price))?,
            None => existing.price_per_liter,
        };

        Ok(Self {
            date: parse_optional_datetime("date", dto.date.as_deref())?.unwrap_or(existing.date),
            liters,
            price_per_liter,
            odometer: parse_whole_number("odometer", dto.odometer.as_ref())?
                .unwrap_or(existing.odometer),
            fuel_type: optional_text(dto.fuel_type).unwrap_or_else(|| existing.fuel_type.clone()),
        })
    }
}
