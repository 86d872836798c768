//! Booking domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::booking::{BookingDto, CreateBookingDto, ReturnBookingDto, UpdateBookingDto},
    server::{
        error::validation::ValidationError,
        util::{
            parse::{non_blank, optional_text, parse_percentage, parse_whole_number, require_text},
            time::{parse_datetime, parse_optional_datetime},
        },
    },
};

/// Approval state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Requested,
    Accepted,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "requested" => Some(Self::Requested),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Reservation of a vehicle by a user for a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub vehicle_id: i32,
    pub user_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub purpose: String,
    pub vehicle_size: String,
    pub approved_by: Option<i32>,
    pub approved_at: Option<DateTime<Utc>>,
    pub end_odometer: Option<i32>,
    pub end_fuel_level: Option<i32>,
    pub return_notes: Option<String>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            user_id: self.user_id,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status.as_str().to_string(),
            purpose: self.purpose,
            vehicle_size: self.vehicle_size,
            approved_by: self.approved_by,
            approved_at: self.approved_at,
            end_odometer: self.end_odometer,
            end_fuel_level: self.end_fuel_level,
            return_notes: self.return_notes,
            returned_at: self.returned_at,
        }
    }

    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking
    /// - `Err(DbErr::Custom)` - Stored status is not a known booking status
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, DbErr> {
        let status = BookingStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown status stored for booking {}: {}",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            user_id: entity.user_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status,
            purpose: entity.purpose,
            vehicle_size: entity.vehicle_size,
            approved_by: entity.approved_by,
            approved_at: entity.approved_at,
            end_odometer: entity.end_odometer,
            end_fuel_level: entity.end_fuel_level,
            return_notes: entity.return_notes,
            returned_at: entity.returned_at,
        })
    }
}

/// Parameters for creating a booking. New bookings always start as requested.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub vehicle_id: i32,
    pub user_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub purpose: String,
    pub vehicle_size: String,
}

impl CreateBookingParam {
    /// Validates a create request, booking for `principal_id` unless another user is named.
    pub fn from_dto(dto: CreateBookingDto, principal_id: i32) -> Result<Self, ValidationError> {
        let vehicle_id = dto.vehicle_id.ok_or(ValidationError::MissingField("vehicle_id"))?;
        let start_time = parse_datetime(
            "start_time",
            &require_text("start_time", dto.start_time)?,
        )?;
        let end_time = parse_datetime("end_time", &require_text("end_time", dto.end_time)?)?;
        ensure_time_range(start_time, end_time)?;

        Ok(Self {
            vehicle_id,
            user_id: dto.user_id.unwrap_or(principal_id),
            start_time,
            end_time,
            purpose: optional_text(dto.purpose).unwrap_or_default(),
            vehicle_size: optional_text(dto.vehicle_size).unwrap_or_default(),
        })
    }
}

/// Parameters for updating a booking. Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookingParam {
    pub vehicle_id: Option<i32>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub purpose: Option<String>,
    pub vehicle_size: Option<String>,
}

impl UpdateBookingParam {
    /// Validates an update against the stored booking so the merged window stays ordered.
    pub fn from_dto(dto: UpdateBookingDto, existing: &Booking) -> Result<Self, ValidationError> {
        let start_time = parse_optional_datetime("start_time", dto.start_time.as_deref())?;
        let end_time = parse_optional_datetime("end_time", dto.end_time.as_deref())?;
        ensure_time_range(
            start_time.unwrap_or(existing.start_time),
            end_time.unwrap_or(existing.end_time),
        )?;

        Ok(Self {
            vehicle_id: dto.vehicle_id,
            start_time,
            end_time,
            purpose: dto.purpose.map(|p| non_blank("purpose", p)).transpose()?,
            vehicle_size: dto
                .vehicle_size
                .map(|s| non_blank("vehicle_size", s))
                .transpose()?,
        })
    }
}

/// Data recorded when a vehicle is handed back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnBookingParam {
    pub end_odometer: Option<i32>,
    pub end_fuel_level: Option<i32>,
    /// Damage noticed during the trip, filed as a damage report.
    pub damages: Option<String>,
    pub notes: Option<String>,
}

impl ReturnBookingParam {
    pub fn from_dto(dto: ReturnBookingDto) -> Result<Self, ValidationError> {
        Ok(Self {
            end_odometer: parse_whole_number("end_odometer", dto.end_odometer.as_ref())?,
            end_fuel_level: parse_percentage("end_fuel_level", dto.end_fuel_level.as_ref())?,
            damages: optional_text(dto.damages),
            notes: optional_text(dto.notes),
        })
    }
}

fn ensure_time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::InvalidTimeRange);
    }
    Ok(())
}
