use crate::server::{
    data::vehicle::VehicleRepository,
    model::vehicle::{CreateVehicleParam, UpdateVehicleParam, VehicleStatus},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod has_dependents;
mod record_return;
