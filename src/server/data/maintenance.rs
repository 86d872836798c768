//! Maintenance record data repository for database operations.

use crate::server::model::maintenance::{MaintenanceRecord, MaintenanceRecordParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct MaintenanceRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MaintenanceRecordRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the maintenance history of a vehicle, newest first.
    pub async fn get_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<MaintenanceRecord>, DbErr> {
        let entities = entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::VehicleId.eq(vehicle_id))
            .order_by_desc(entity::maintenance_record::Column::Date)
            .order_by_desc(entity::maintenance_record::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MaintenanceRecord::from_entity)
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MaintenanceRecord>, DbErr> {
        let entity = entity::prelude::MaintenanceRecord::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(MaintenanceRecord::from_entity))
    }

    pub async fn create(
        &self,
        vehicle_id: i32,
        param: MaintenanceRecordParam,
    ) -> Result<MaintenanceRecord, DbErr> {
        let entity = entity::maintenance_record::ActiveModel {
            vehicle_id: ActiveValue::Set(vehicle_id),
            date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
            cost: ActiveValue::Set(param.cost),
            odometer: ActiveValue::Set(param.odometer),
            performed_by: ActiveValue::Set(param.performed_by),
            kind: ActiveValue::Set(param.kind.map(|k| k.as_str().to_string())),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MaintenanceRecord::from_entity(entity))
    }

    /// Overwrites every writable field of a record.
    ///
    /// # Returns
    /// - `Ok(MaintenanceRecord)` - The updated record
    /// - `Err(DbErr::RecordNotFound)` - No record with that ID
    pub async fn update(
        &self,
        id: i32,
        param: MaintenanceRecordParam,
    ) -> Result<MaintenanceRecord, DbErr> {
        let record = entity::prelude::MaintenanceRecord::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Maintenance record {} not found",
                id
            )))?;

        let mut active_model: entity::maintenance_record::ActiveModel = record.into();
        active_model.date = ActiveValue::Set(param.date);
        active_model.description = ActiveValue::Set(param.description);
        active_model.cost = ActiveValue::Set(param.cost);
        active_model.odometer = ActiveValue::Set(param.odometer);
        active_model.performed_by = ActiveValue::Set(param.performed_by);
        active_model.kind = ActiveValue::Set(param.kind.map(|k| k.as_str().to_string()));

        Ok(MaintenanceRecord::from_entity(
            active_model.update(self.db).await?,
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::MaintenanceRecord::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
