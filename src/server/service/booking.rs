//! Vehicle bookings and their approval workflow.
//!
//! Users without the approve permission only ever see and change their own bookings.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::booking::UpdateBookingDto,
    server::{
        data::{
            booking::BookingRepository, damage_report::DamageReportRepository,
            vehicle::VehicleRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            booking::{
                Booking, BookingStatus, CreateBookingParam, ReturnBookingParam,
                UpdateBookingParam,
            },
            damage_report::CreateDamageReportParam,
            user::User,
            vehicle::VehicleStatus,
        },
        service::vehicle::require_vehicle,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists bookings, newest start first
    ///
    /// Approvers see every booking; everybody else only their own.
    pub async fn get_all(&self, principal: &User) -> Result<Vec<Booking>, AppError> {
        let user_filter = (!principal.permissions().approve_requests).then_some(principal.id);

        Ok(BookingRepository::new(self.db).get_all(user_filter).await?)
    }

    pub async fn get_by_id(&self, id: i32, principal: &User) -> Result<Booking, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        ensure_access(&booking, principal)?;

        Ok(booking)
    }

    /// Requests a booking; it starts in the requested state
    ///
    /// Booking on behalf of someone else requires the approve permission.
    pub async fn create(
        &self,
        param: CreateBookingParam,
        principal: &User,
    ) -> Result<Booking, AppError> {
        if param.user_id != principal.id && !principal.permissions().approve_requests {
            return Err(AuthError::AccessDenied(
                principal.id,
                format!("Cannot book on behalf of user {}", param.user_id),
            )
            .into());
        }

        require_vehicle(self.db, param.vehicle_id).await?;

        Ok(BookingRepository::new(self.db).create(param).await?)
    }

    /// Changes a booking that is still waiting for a decision
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(AppError::Conflict)` - The booking was already accepted or rejected
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateBookingDto,
        principal: &User,
    ) -> Result<Booking, AppError> {
        let existing = self.get_by_id(id, principal).await?;
        ensure_status(&existing, BookingStatus::Requested)?;

        let param = UpdateBookingParam::from_dto(dto, &existing)?;
        if let Some(vehicle_id) = param.vehicle_id {
            require_vehicle(self.db, vehicle_id).await?;
        }

        Ok(BookingRepository::new(self.db).update(id, param).await?)
    }

    /// Accepts a requested booking and marks its vehicle as booked
    pub async fn approve(&self, id: i32, approver: &User) -> Result<Booking, AppError> {
        let existing = self.get_by_id(id, approver).await?;
        ensure_status(&existing, BookingStatus::Requested)?;

        let txn = self.db.begin().await?;

        let booking = BookingRepository::new(&txn)
            .set_decision(id, BookingStatus::Accepted, approver.id, Utc::now())
            .await?;

        VehicleRepository::new(&txn)
            .set_status(existing.vehicle_id, VehicleStatus::Booked)
            .await?;

        txn.commit().await?;

        tracing::info!("Booking {} approved by user {}", id, approver.id);

        Ok(booking)
    }

    /// Rejects a requested booking
    pub async fn reject(&self, id: i32, approver: &User) -> Result<Booking, AppError> {
        let existing = self.get_by_id(id, approver).await?;
        ensure_status(&existing, BookingStatus::Requested)?;

        let booking = BookingRepository::new(self.db)
            .set_decision(id, BookingStatus::Rejected, approver.id, Utc::now())
            .await?;

        tracing::info!("Booking {} rejected by user {}", id, approver.id);

        Ok(booking)
    }

    /// Hands the vehicle of an accepted booking back
    ///
    /// Stores the readings on the booking, applies them to the vehicle, makes the vehicle
    /// available and files reported damage as a new damage report. All of this is written
    /// in one transaction.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The returned booking
    /// - `Err(AppError::Conflict)` - The booking is not accepted or was already returned
    pub async fn return_vehicle(
        &self,
        id: i32,
        param: ReturnBookingParam,
        principal: &User,
    ) -> Result<Booking, AppError> {
        let existing = self.get_by_id(id, principal).await?;
        ensure_status(&existing, BookingStatus::Accepted)?;
        if existing.returned_at.is_some() {
            return Err(AppError::Conflict(format!(
                "Vehicle of booking {} was already returned",
                id
            )));
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;

        let booking = BookingRepository::new(&txn)
            .record_return(id, &param, now)
            .await?;

        VehicleRepository::new(&txn)
            .record_return(existing.vehicle_id, param.end_odometer, param.end_fuel_level)
            .await?;

        if let Some(damages) = param.damages {
            DamageReportRepository::new(&txn)
                .create(CreateDamageReportParam {
                    vehicle_id: existing.vehicle_id,
                    date: now,
                    description: damages,
                    images: Vec::new(),
                    repair_cost: None,
                })
                .await?;
        }

        txn.commit().await?;

        Ok(booking)
    }

    pub async fn delete(&self, id: i32, principal: &User) -> Result<(), AppError> {
        self.get_by_id(id, principal).await?;

        BookingRepository::new(self.db).delete(id).await?;

        Ok(())
    }
}

fn ensure_access(booking: &Booking, principal: &User) -> Result<(), AppError> {
    if booking.user_id == principal.id || principal.permissions().approve_requests {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        principal.id,
        format!("Booking {} belongs to user {}", booking.id, booking.user_id),
    )
    .into())
}

fn ensure_status(booking: &Booking, expected: BookingStatus) -> Result<(), AppError> {
    if booking.status == expected {
        return Ok(());
    }

    Err(AppError::Conflict(format!(
        "Booking {} is {}, expected {}",
        booking.id,
        booking.status.as_str(),
        expected.as_str()
    )))
}
