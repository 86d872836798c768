//! Fuel log data repository for database operations.

use crate::server::model::fuel_log::{FuelLog, FuelLogParam};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct FuelLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FuelLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the fuel logs of a vehicle, newest first.
    pub async fn get_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<FuelLog>, DbErr> {
        let entities = entity::prelude::FuelLog::find()
            .filter(entity::fuel_log::Column::VehicleId.eq(vehicle_id))
            .order_by_desc(entity::fuel_log::Column::Date)
            .order_by_desc(entity::fuel_log::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(FuelLog::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<FuelLog>, DbErr> {
        let entity = entity::prelude::FuelLog::find_by_id(id).one(self.db).await?;

        Ok(entity.map(FuelLog::from_entity))
    }

    /// Inserts a fuel log, storing the total cost computed from liters and price.
    pub async fn create(&self, vehicle_id: i32, param: FuelLogParam) -> Result<FuelLog, DbErr> {
        let total_cost = param.total_cost();

        let entity = entity::fuel_log::ActiveModel {
            vehicle_id: ActiveValue::Set(vehicle_id),
            date: ActiveValue::Set(param.date),
            liters: ActiveValue::Set(param.liters),
            price_per_liter: ActiveValue::Set(param.price_per_liter),
            total_cost: ActiveValue::Set(total_cost),
            odometer: ActiveValue::Set(param.odometer),
            fuel_type: ActiveValue::Set(param.fuel_type),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(FuelLog::from_entity(entity))
    }

    /// Overwrites every writable field of a fuel log and recomputes the total cost.
    ///
    /// # Returns
    /// - `Ok(FuelLog)` - The updated log
    /// - `Err(DbErr::RecordNotFound)` - No log with that ID
    pub async fn update(&self, id: i32, param: FuelLogParam) -> Result<FuelLog, DbErr> {
        let log = entity::prelude::FuelLog::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Fuel log {} not found", id)))?;

        let mut active_model: entity::fuel_log::ActiveModel = log.into();
        active_model.total_cost = ActiveValue::Set(param.total_cost());
        active_model.date = ActiveValue::Set(param.date);
        active_model.liters = ActiveValue::Set(param.liters);
        active_model.price_per_liter = ActiveValue::Set(param.price_per_liter);
        active_model.odometer = ActiveValue::Set(param.odometer);
        active_model.fuel_type = ActiveValue::Set(param.fuel_type);

        Ok(FuelLog::from_entity(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::FuelLog::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
