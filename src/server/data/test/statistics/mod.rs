use crate::server::{data::statistics::StatisticsRepository, util::time::MonthWindow};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_accepted_bookings;
mod get_accepted_bookings_by_department;
