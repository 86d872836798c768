//! Fuel log factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test fuel logs.
///
/// Defaults: dated now, 40 liters of `"Diesel"` at 1.75, odometer `1000`. The total cost is
/// always derived from liters and price.
pub struct FuelLogFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    date: DateTime<Utc>,
    liters: f64,
    price_per_liter: f64,
    odometer: i32,
    fuel_type: String,
}

impl<'a> FuelLogFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32) -> Self {
        Self {
            db,
            vehicle_id,
            date: Utc::now(),
            liters: 40.0,
            price_per_liter: 1.75,
            odometer: 1000,
            fuel_type: "Diesel".to_string(),
        }
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn liters(mut self, liters: f64) -> Self {
        self.liters = liters;
        self
    }

    pub fn price_per_liter(mut self, price_per_liter: f64) -> Self {
        self.price_per_liter = price_per_liter;
        self
    }

    pub fn odometer(mut self, odometer: i32) -> Self {
        self.odometer = odometer;
        self
    }

    pub fn fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = fuel_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::fuel_log::Model, DbErr> {
        entity::fuel_log::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            date: ActiveValue::Set(self.date),
            liters: ActiveValue::Set(self.liters),
            price_per_liter: ActiveValue::Set(self.price_per_liter),
            total_cost: ActiveValue::Set(self.liters * self.price_per_liter),
            odometer: ActiveValue::Set(self.odometer),
            fuel_type: ActiveValue::Set(self.fuel_type),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_fuel_log(
    db: &DatabaseConnection,
    vehicle_id: i32,
) -> Result<entity::fuel_log::Model, DbErr> {
    FuelLogFactory::new(db, vehicle_id).build().await
}
