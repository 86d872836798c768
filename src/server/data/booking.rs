//! Booking data repository for database operations.

use crate::server::model::booking::{
    Booking, BookingStatus, CreateBookingParam, ReturnBookingParam, UpdateBookingParam,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new booking in the requested state.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(DbErr)` - Database error, including a foreign key violation for unknown
    ///   vehicle or user IDs
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            vehicle_id: ActiveValue::Set(param.vehicle_id),
            user_id: ActiveValue::Set(param.user_id),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            status: ActiveValue::Set(BookingStatus::Requested.as_str().to_string()),
            purpose: ActiveValue::Set(param.purpose),
            vehicle_size: ActiveValue::Set(param.vehicle_size),
            approved_by: ActiveValue::Set(None),
            approved_at: ActiveValue::Set(None),
            end_odometer: ActiveValue::Set(None),
            end_fuel_level: ActiveValue::Set(None),
            return_notes: ActiveValue::Set(None),
            returned_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Gets bookings ordered by start time, latest first.
    ///
    /// # Arguments
    /// - `user_id` - Restricts the result to one user's bookings when set
    pub async fn get_all(&self, user_id: Option<i32>) -> Result<Vec<Booking>, DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(user_id) = user_id {
            query = query.filter(entity::booking::Column::UserId.eq(user_id));
        }

        query
            .order_by_desc(entity::booking::Column::StartTime)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect()
    }

    pub async fn update(&self, id: i32, param: UpdateBookingParam) -> Result<Booking, DbErr> {
        let mut active_model = self.find_active(id).await?;

        if let Some(vehicle_id) = param.vehicle_id {
            active_model.vehicle_id = ActiveValue::Set(vehicle_id);
        }
        if let Some(start_time) = param.start_time {
            active_model.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = param.end_time {
            active_model.end_time = ActiveValue::Set(end_time);
        }
        if let Some(purpose) = param.purpose {
            active_model.purpose = ActiveValue::Set(purpose);
        }
        if let Some(vehicle_size) = param.vehicle_size {
            active_model.vehicle_size = ActiveValue::Set(vehicle_size);
        }

        Booking::from_entity(active_model.update(self.db).await?)
    }

    /// Records an approval decision.
    ///
    /// # Arguments
    /// - `id` - ID of the booking
    /// - `status` - Accepted or rejected
    /// - `approved_by` - ID of the deciding user
    /// - `decided_at` - Time of the decision
    pub async fn set_decision(
        &self,
        id: i32,
        status: BookingStatus,
        approved_by: i32,
        decided_at: DateTime<Utc>,
    ) -> Result<Booking, DbErr> {
        let mut active_model = self.find_active(id).await?;
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.approved_by = ActiveValue::Set(Some(approved_by));
        active_model.approved_at = ActiveValue::Set(Some(decided_at));

        Booking::from_entity(active_model.update(self.db).await?)
    }

    /// Stores the return readings and notes of a booking.
    pub async fn record_return(
        &self,
        id: i32,
        param: &ReturnBookingParam,
        returned_at: DateTime<Utc>,
    ) -> Result<Booking, DbErr> {
        let mut active_model = self.find_active(id).await?;
        active_model.end_odometer = ActiveValue::Set(param.end_odometer);
        active_model.end_fuel_level = ActiveValue::Set(param.end_fuel_level);
        active_model.return_notes = ActiveValue::Set(param.notes.clone());
        active_model.returned_at = ActiveValue::Set(Some(returned_at));

        Booking::from_entity(active_model.update(self.db).await?)
    }

    /// Counts the bookings of a user, used to restrict user deletion.
    pub async fn count_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    async fn find_active(&self, id: i32) -> Result<entity::booking::ActiveModel, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        Ok(booking.into())
    }
}
