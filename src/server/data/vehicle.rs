//! Vehicle data repository for database operations.

use crate::server::model::vehicle::{
    CreateVehicleParam, UpdateVehicleParam, Vehicle, VehicleStatus,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle.
    ///
    /// # Arguments
    /// - `param` - Validated vehicle fields with the image already resolved
    /// - `created_at` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateVehicleParam,
        created_at: DateTime<Utc>,
    ) -> Result<Vehicle, DbErr> {
        let entity = entity::vehicle::ActiveModel {
            model: ActiveValue::Set(param.model),
            license_plate: ActiveValue::Set(param.license_plate),
            image: ActiveValue::Set(param.image),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            odometer: ActiveValue::Set(param.odometer),
            fuel_level: ActiveValue::Set(param.fuel_level),
            last_service: ActiveValue::Set(None),
            next_service: ActiveValue::Set(None),
            inspection_due: ActiveValue::Set(param.inspection_due),
            emissions_test_due: ActiveValue::Set(param.emissions_test_due),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Vehicle::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
            .map(Vehicle::from_entity)
            .transpose()
    }

    /// Finds the vehicle registered under a license plate.
    pub async fn find_by_license_plate(
        &self,
        license_plate: &str,
    ) -> Result<Option<Vehicle>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::LicensePlate.eq(license_plate))
            .one(self.db)
            .await?
            .map(Vehicle::from_entity)
            .transpose()
    }

    /// Gets all vehicles ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Vehicle::from_entity)
            .collect()
    }

    /// Updates the given fields of a vehicle.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The updated vehicle
    /// - `Err(DbErr::RecordNotFound)` - No vehicle with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, param: UpdateVehicleParam) -> Result<Vehicle, DbErr> {
        let mut active_model = self.find_active(id).await?;

        if let Some(model) = param.model {
            active_model.model = ActiveValue::Set(model);
        }
        if let Some(license_plate) = param.license_plate {
            active_model.license_plate = ActiveValue::Set(license_plate);
        }
        if let Some(image) = param.image {
            active_model.image = ActiveValue::Set(Some(image));
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(odometer) = param.odometer {
            active_model.odometer = ActiveValue::Set(odometer);
        }
        if let Some(fuel_level) = param.fuel_level {
            active_model.fuel_level = ActiveValue::Set(fuel_level);
        }
        if let Some(next_service) = param.next_service {
            active_model.next_service = ActiveValue::Set(Some(next_service));
        }
        if let Some(inspection_due) = param.inspection_due {
            active_model.inspection_due = ActiveValue::Set(Some(inspection_due));
        }
        if let Some(emissions_test_due) = param.emissions_test_due {
            active_model.emissions_test_due = ActiveValue::Set(Some(emissions_test_due));
        }

        Vehicle::from_entity(active_model.update(self.db).await?)
    }

    /// Sets the odometer to the reading of a fuel or maintenance event.
    pub async fn update_odometer(&self, id: i32, odometer: i32) -> Result<(), DbErr> {
        let mut active_model = self.find_active(id).await?;
        active_model.odometer = ActiveValue::Set(odometer);
        active_model.update(self.db).await?;
        Ok(())
    }

    /// Records a service visit, updating the last service date and, when present, the odometer.
    pub async fn record_service(
        &self,
        id: i32,
        date: DateTime<Utc>,
        odometer: Option<i32>,
    ) -> Result<(), DbErr> {
        let mut active_model = self.find_active(id).await?;
        active_model.last_service = ActiveValue::Set(Some(date));
        if let Some(odometer) = odometer {
            active_model.odometer = ActiveValue::Set(odometer);
        }
        active_model.update(self.db).await?;
        Ok(())
    }

    pub async fn set_status(&self, id: i32, status: VehicleStatus) -> Result<(), DbErr> {
        let mut active_model = self.find_active(id).await?;
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.update(self.db).await?;
        Ok(())
    }

    /// Applies the readings of a returned booking and makes the vehicle available again.
    pub async fn record_return(
        &self,
        id: i32,
        odometer: Option<i32>,
        fuel_level: Option<i32>,
    ) -> Result<(), DbErr> {
        let mut active_model = self.find_active(id).await?;
        if let Some(odometer) = odometer {
            active_model.odometer = ActiveValue::Set(odometer);
        }
        if let Some(fuel_level) = fuel_level {
            active_model.fuel_level = ActiveValue::Set(fuel_level);
        }
        active_model.status = ActiveValue::Set(VehicleStatus::Available.as_str().to_string());
        active_model.update(self.db).await?;
        Ok(())
    }

    /// Checks whether any booking, maintenance record, fuel log, damage report or document
    /// still references the vehicle.
    pub async fn has_dependents(&self, id: i32) -> Result<bool, DbErr> {
        let bookings = entity::prelude::Booking::find()
            .filter(entity::booking::Column::VehicleId.eq(id))
            .count(self.db)
            .await?;
        let maintenance = entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::VehicleId.eq(id))
            .count(self.db)
            .await?;
        let fuel_logs = entity::prelude::FuelLog::find()
            .filter(entity::fuel_log::Column::VehicleId.eq(id))
            .count(self.db)
            .await?;
        let damage_reports = entity::prelude::DamageReport::find()
            .filter(entity::damage_report::Column::VehicleId.eq(id))
            .count(self.db)
            .await?;
        let documents = entity::prelude::VehicleDocument::find()
            .filter(entity::vehicle_document::Column::VehicleId.eq(id))
            .count(self.db)
            .await?;

        Ok(bookings + maintenance + fuel_logs + damage_reports + documents > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    async fn find_active(&self, id: i32) -> Result<entity::vehicle::ActiveModel, DbErr> {
        let vehicle = entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Vehicle {} not found", id)))?;

        Ok(vehicle.into())
    }
}
