//! Audit log data repository.
//!
//! Append-only: entries can be created and listed, never changed or removed.

use crate::server::model::audit_log::{AuditLog, CreateAuditLogParam, GetAuditLogsParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAuditLogParam) -> Result<AuditLog, DbErr> {
        let entity = entity::audit_log::ActiveModel {
            timestamp: ActiveValue::Set(param.timestamp),
            action: ActiveValue::Set(param.action),
            actor: ActiveValue::Set(param.actor),
            vehicle_id: ActiveValue::Set(param.vehicle_id),
            description: ActiveValue::Set(param.description),
            old_values: ActiveValue::Set(param.old_values),
            new_values: ActiveValue::Set(param.new_values),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AuditLog::from_entity(entity))
    }

    /// Gets a page of audit entries, newest first.
    ///
    /// # Arguments
    /// - `param` - Zero-indexed page, page size and optional vehicle filter
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Entries of the page and the total number of matching entries
    /// - `Err(DbErr)` - Database error during the count or page query
    pub async fn get_paginated(
        &self,
        param: &GetAuditLogsParam,
    ) -> Result<(Vec<AuditLog>, u64), DbErr> {
        let mut query = entity::prelude::AuditLog::find();

        if let Some(vehicle_id) = param.vehicle_id {
            query = query.filter(entity::audit_log::Column::VehicleId.eq(vehicle_id));
        }

        let paginator = query
            .order_by_desc(entity::audit_log::Column::Timestamp)
            .order_by_desc(entity::audit_log::Column::Id)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entries = paginator
            .fetch_page(param.page)
            .await?
            .into_iter()
            .map(AuditLog::from_entity)
            .collect();

        Ok((entries, total))
    }
}
