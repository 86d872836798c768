use crate::{
    model::booking::UpdateBookingDto,
    server::{
        data::{
            booking::BookingRepository, damage_report::DamageReportRepository,
            vehicle::VehicleRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            booking::{BookingStatus, CreateBookingParam, ReturnBookingParam},
            user::User,
            vehicle::VehicleStatus,
        },
        service::booking::BookingService,
    },
};
use chrono::{Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;

fn principal(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}
