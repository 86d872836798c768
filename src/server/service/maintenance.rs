//! Maintenance logbook.
//!
//! Every write is mirrored into the audit log and keeps the vehicle's odometer and last
//! service date in step with the recorded visit. The record, the vehicle sync and the audit
//! entry are written in one transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::maintenance::MaintenanceRecordInputDto,
    server::{
        data::{maintenance::MaintenanceRecordRepository, vehicle::VehicleRepository},
        error::AppError,
        model::{
            maintenance::{MaintenanceRecord, MaintenanceRecordParam},
            user::User,
        },
        service::{
            audit_log::{snapshot, AuditLogService},
            vehicle::require_vehicle,
        },
    },
};

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the records of a vehicle, newest first
    pub async fn get_by_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        require_vehicle(self.db, vehicle_id).await?;

        Ok(MaintenanceRecordRepository::new(self.db)
            .get_by_vehicle(vehicle_id)
            .await?)
    }

    pub async fn create(
        &self,
        vehicle_id: i32,
        param: MaintenanceRecordParam,
        actor: &User,
    ) -> Result<MaintenanceRecord, AppError> {
        require_vehicle(self.db, vehicle_id).await?;

        let txn = self.db.begin().await?;

        let record = MaintenanceRecordRepository::new(&txn)
            .create(vehicle_id, param)
            .await?;

        VehicleRepository::new(&txn)
            .record_service(vehicle_id, record.date, record.odometer)
            .await?;

        AuditLogService::new(&txn)
            .record(
                "maintenance_created",
                actor,
                vehicle_id,
                format!("Maintenance record '{}' created", record.description),
                None,
                Some(snapshot(&record.clone().into_dto())?),
            )
            .await?;

        txn.commit().await?;

        Ok(record)
    }

    /// Updates a record, keeping stored values for fields absent from the request
    pub async fn update(
        &self,
        id: i32,
        dto: MaintenanceRecordInputDto,
        actor: &User,
    ) -> Result<MaintenanceRecord, AppError> {
        let existing = self.get_by_id(id).await?;
        let param = MaintenanceRecordParam::merge_dto(dto, &existing)?;

        let txn = self.db.begin().await?;

        let record = MaintenanceRecordRepository::new(&txn).update(id, param).await?;

        VehicleRepository::new(&txn)
            .record_service(record.vehicle_id, record.date, record.odometer)
            .await?;

        AuditLogService::new(&txn)
            .record(
                "maintenance_updated",
                actor,
                record.vehicle_id,
                format!("Maintenance record '{}' updated", record.description),
                Some(snapshot(&existing.into_dto())?),
                Some(snapshot(&record.clone().into_dto())?),
            )
            .await?;

        txn.commit().await?;

        Ok(record)
    }

    pub async fn delete(&self, id: i32, actor: &User) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;

        let txn = self.db.begin().await?;

        MaintenanceRecordRepository::new(&txn).delete(id).await?;

        AuditLogService::new(&txn)
            .record(
                "maintenance_deleted",
                actor,
                existing.vehicle_id,
                format!("Maintenance record '{}' deleted", existing.description),
                Some(snapshot(&existing.into_dto())?),
                None,
            )
            .await?;

        txn.commit().await?;

        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> Result<MaintenanceRecord, AppError> {
        MaintenanceRecordRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance record {} not found", id)))
    }
}
