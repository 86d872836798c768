use crate::{
    model::{api::NumberInput, maintenance::MaintenanceRecordInputDto},
    server::{
        data::{
            audit_log::AuditLogRepository, maintenance::MaintenanceRecordRepository,
            vehicle::VehicleRepository,
        },
        error::AppError,
        model::{
            audit_log::GetAuditLogsParam,
            maintenance::{MaintenanceKind, MaintenanceRecordParam},
            user::User,
        },
        service::maintenance::MaintenanceService,
    },
};
use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;

fn principal(entity: entity::user::Model) -> User {
    User::from_entity(entity).unwrap()
}

fn audit_page(vehicle_id: i32) -> GetAuditLogsParam {
    GetAuditLogsParam {
        page: 0,
        per_page: 10,
        vehicle_id: Some(vehicle_id),
    }
}
