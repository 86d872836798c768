//! Append-only change history for vehicle logbook entries.

use chrono::Utc;
use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::server::{
    data::audit_log::AuditLogRepository,
    error::{internal::InternalError, AppError},
    model::{
        audit_log::{AuditLog, CreateAuditLogParam, GetAuditLogsParam, PaginatedAuditLogs},
        user::User,
    },
};

/// Serializes a before/after state for the audit log.
pub fn snapshot<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string(value).map_err(InternalError::from)?)
}

/// Works on a plain connection or inside the transaction of the change being recorded.
pub struct AuditLogService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an entry stamped with the current time.
    ///
    /// # Arguments
    /// - `action` - Short machine-readable action name, e.g. `maintenance_created`
    /// - `actor` - User performing the change
    /// - `vehicle_id` - Vehicle the change belongs to
    /// - `description` - Human-readable summary
    /// - `old_values` / `new_values` - Serialized snapshots, see [`snapshot`]
    pub async fn record(
        &self,
        action: &str,
        actor: &User,
        vehicle_id: i32,
        description: String,
        old_values: Option<String>,
        new_values: Option<String>,
    ) -> Result<AuditLog, AppError> {
        let entry = AuditLogRepository::new(self.db)
            .create(CreateAuditLogParam {
                timestamp: Utc::now(),
                action: action.to_string(),
                actor: Some(actor.name.clone()),
                vehicle_id: Some(vehicle_id),
                description: Some(description),
                old_values,
                new_values,
            })
            .await?;

        Ok(entry)
    }

    /// Gets a page of entries, newest first
    pub async fn get_paginated(
        &self,
        param: GetAuditLogsParam,
    ) -> Result<PaginatedAuditLogs, AppError> {
        let (entries, total) = AuditLogRepository::new(self.db)
            .get_paginated(&param)
            .await?;

        let total_pages = if param.per_page > 0 {
            (total as f64 / param.per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedAuditLogs {
            entries,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }
}
