//! Vehicle factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test vehicles.
///
/// Defaults:
/// - model: `"VW Golf"`
/// - license_plate: `"B-T {id}"`
/// - status: `"available"`
/// - odometer: `0`, fuel_level: `100`
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    model: String,
    license_plate: String,
    image: Option<String>,
    status: String,
    odometer: i32,
    fuel_level: i32,
    last_service: Option<DateTime<Utc>>,
}

impl<'a> VehicleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            model: "VW Golf".to_string(),
            license_plate: format!("B-T {}", id),
            image: None,
            status: "available".to_string(),
            odometer: 0,
            fuel_level: 100,
            last_service: None,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = license_plate.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the stored status string, `"available"`, `"booked"` or `"maintenance"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn odometer(mut self, odometer: i32) -> Self {
        self.odometer = odometer;
        self
    }

    pub fn fuel_level(mut self, fuel_level: i32) -> Self {
        self.fuel_level = fuel_level;
        self
    }

    pub fn last_service(mut self, last_service: DateTime<Utc>) -> Self {
        self.last_service = Some(last_service);
        self
    }

    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            model: ActiveValue::Set(self.model),
            license_plate: ActiveValue::Set(self.license_plate),
            image: ActiveValue::Set(self.image),
            status: ActiveValue::Set(self.status),
            odometer: ActiveValue::Set(self.odometer),
            fuel_level: ActiveValue::Set(self.fuel_level),
            last_service: ActiveValue::Set(self.last_service),
            next_service: ActiveValue::Set(None),
            inspection_due: ActiveValue::Set(None),
            emissions_test_due: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available "VW Golf" with a unique plate.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
