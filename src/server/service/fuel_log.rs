use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::fuel_log::FuelLogInputDto,
    server::{
        data::{fuel_log::FuelLogRepository, vehicle::VehicleRepository},
        error::AppError,
        model::fuel_log::{FuelLog, FuelLogParam},
        service::vehicle::require_vehicle,
    },
};

pub struct FuelLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FuelLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the fuel logs of a vehicle, newest first
    pub async fn get_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<FuelLog>, AppError> {
        require_vehicle(self.db, vehicle_id).await?;

        Ok(FuelLogRepository::new(self.db)
            .get_by_vehicle(vehicle_id)
            .await?)
    }

    /// Records a refuelling and moves the vehicle's odometer to the reading at the pump
    pub async fn create(&self, vehicle_id: i32, param: FuelLogParam) -> Result<FuelLog, AppError> {
        require_vehicle(self.db, vehicle_id).await?;

        let txn = self.db.begin().await?;

        let log = FuelLogRepository::new(&txn)
            .create(vehicle_id, param)
            .await?;

        VehicleRepository::new(&txn)
            .update_odometer(vehicle_id, log.odometer)
            .await?;

        txn.commit().await?;

        Ok(log)
    }

    /// Updates a fuel log, recomputing its total cost
    pub async fn update(&self, id: i32, dto: FuelLogInputDto) -> Result<FuelLog, AppError> {
        let existing = self.get_by_id(id).await?;
        let param = FuelLogParam::merge_dto(dto, &existing)?;

        let txn = self.db.begin().await?;

        let log = FuelLogRepository::new(&txn).update(id, param).await?;

        VehicleRepository::new(&txn)
            .update_odometer(log.vehicle_id, log.odometer)
            .await?;

        txn.commit().await?;

        Ok(log)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get_by_id(id).await?;

        FuelLogRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> Result<FuelLog, AppError> {
        FuelLogRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Fuel log {} not found", id)))
    }
}
