use crate::server::{
    data::maintenance::MaintenanceRecordRepository,
    model::maintenance::{MaintenanceKind, MaintenanceRecordParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_vehicle;
