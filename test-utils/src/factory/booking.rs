//! Booking factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test bookings.
///
/// Defaults:
/// - start: now, end: start + 2 hours
/// - status: `"requested"`
/// - purpose: `"Kundentermin"`, vehicle_size: `""`
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    user_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: String,
    purpose: String,
    vehicle_size: String,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32, user_id: i32) -> Self {
        let start_time = Utc::now();
        Self {
            db,
            vehicle_id,
            user_id,
            start_time,
            end_time: start_time + Duration::hours(2),
            status: "requested".to_string(),
            purpose: "Kundentermin".to_string(),
            vehicle_size: String::new(),
        }
    }

    /// Sets both ends of the booking window.
    pub fn window(mut self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Sets the stored status string, `"requested"`, `"accepted"` or `"rejected"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Shorthand for `status("accepted")`.
    pub fn accepted(self) -> Self {
        self.status("accepted")
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn vehicle_size(mut self, vehicle_size: impl Into<String>) -> Self {
        self.vehicle_size = vehicle_size.into();
        self
    }

    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            user_id: ActiveValue::Set(self.user_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
            purpose: ActiveValue::Set(self.purpose),
            vehicle_size: ActiveValue::Set(self.vehicle_size),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            end_odometer: ActiveValue::Set(None),
            end_fuel_level: ActiveValue::Set(None),
            return_notes: ActiveValue::Set(None),
            returned_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a requested two-hour booking starting now.
pub async fn create_booking(
    db: &DatabaseConnection,
    vehicle_id: i32,
    user_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, vehicle_id, user_id).build().await
}
