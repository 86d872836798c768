use crate::server::{
    data::booking::BookingRepository,
    model::booking::{BookingStatus, CreateBookingParam, ReturnBookingParam},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod record_return;
mod set_decision;
