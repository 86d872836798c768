use crate::server::{
    data::audit_log::AuditLogRepository,
    model::audit_log::{CreateAuditLogParam, GetAuditLogsParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;


fn entry(vehicle_id: Option<i32>, minutes_ago: i64) -> CreateAuditLogParam {
    CreateAuditLogParam {
        timestamp: Utc::now() - Duration::minutes(minutes_ago),
        action: "maintenance_created".to_string(),
        actor: Some("Admin".to_string()),
        vehicle_id,
        description: None,
        old_values: None,
        new_values: Some(r#"{"cost":10.0}"#.to_string()),
    }
}
