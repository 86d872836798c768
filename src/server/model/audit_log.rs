//! Audit log domain models.
//!
//! Entries are append-only. Snapshots of the affected record are stored as JSON text and
//! parsed back into JSON values for API responses.

use chrono::{DateTime, Utc};

use crate::model::audit_log::{AuditLogDto, PaginatedAuditLogsDto};

/// Recorded change to fleet data.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    pub id: i32,
    pub timestamp: DateTime<Utc>,
    pub action: String,
    /// Name of the user who performed the action.
    pub actor: Option<String>,
    /// Affected vehicle; kept after the vehicle itself is deleted.
    pub vehicle_id: Option<i32>,
    pub description: Option<String>,
    pub old_values: Option<String>,
    pub new_values: Option<String>,
}

impl AuditLog {
    /// Converts the entry to a DTO.
    ///
    /// Snapshots that are not valid JSON are returned as plain JSON strings.
    pub fn into_dto(self) -> AuditLogDto {
        AuditLogDto {
            id: self.id,
            timestamp: self.timestamp,
            action: self.action,
            actor: self.actor,
            vehicle_id: self.vehicle_id,
            description: self.description,
            old_values: self.old_values.map(snapshot_value),
            new_values: self.new_values.map(snapshot_value),
        }
    }

    pub fn from_entity(entity: entity::audit_log::Model) -> Self {
        Self {
            id: entity.id,
            timestamp: entity.timestamp,
            action: entity.action,
            actor: entity.actor,
            vehicle_id: entity.vehicle_id,
            description: entity.description,
            old_values: entity.old_values,
            new_values: entity.new_values,
        }
    }
}

fn snapshot_value(raw: String) -> serde_json::Value {
    serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw))
}

/// Parameters for appending an audit entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLogParam {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub actor: Option<String>,
    pub vehicle_id: Option<i32>,
    pub description: Option<String>,
    /// JSON text of the record before the change.
    pub old_values: Option<String>,
    /// JSON text of the record after the change.
    pub new_values: Option<String>,
}

/// Parameters for paginated audit log queries.
#[derive(Debug, Clone)]
pub struct GetAuditLogsParam {
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
    /// Restricts the listing to one vehicle.
    pub vehicle_id: Option<i32>,
}

/// Page of audit entries, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedAuditLogs {
    pub entries: Vec<AuditLog>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAuditLogs {
    pub fn into_dto(self) -> PaginatedAuditLogsDto {
        PaginatedAuditLogsDto {
            entries: self.entries.into_iter().map(AuditLog::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
