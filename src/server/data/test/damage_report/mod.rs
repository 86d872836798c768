use crate::server::{
    data::damage_report::DamageReportRepository,
    model::damage_report::{CreateDamageReportParam, DamageStatus, UpdateDamageReportParam},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
