//! Maintenance record factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test maintenance records.
///
/// Defaults: dated now, `"Ölwechsel"`, cost `0.0`, kind `"Routinewartung"`, no odometer.
pub struct MaintenanceRecordFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    date: DateTime<Utc>,
    description: String,
    cost: f64,
    odometer: Option<i32>,
    performed_by: Option<String>,
    kind: Option<String>,
}

impl<'a> MaintenanceRecordFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32) -> Self {
        Self {
            db,
            vehicle_id,
            date: Utc::now(),
            description: "Ölwechsel".to_string(),
            cost: 0.0,
            odometer: None,
            performed_by: None,
            kind: Some("Routinewartung".to_string()),
        }
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn odometer(mut self, odometer: i32) -> Self {
        self.odometer = Some(odometer);
        self
    }

    pub fn performed_by(mut self, performed_by: impl Into<String>) -> Self {
        self.performed_by = Some(performed_by.into());
        self
    }

    /// Sets the stored kind, e.g. `"Inspektion"`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub async fn build(self) -> Result<entity::maintenance_record::Model, DbErr> {
        entity::maintenance_record::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            date: ActiveValue::Set(self.date),
            description: ActiveValue::Set(self.description),
            cost: ActiveValue::Set(self.cost),
            odometer: ActiveValue::Set(self.odometer),
            performed_by: ActiveValue::Set(self.performed_by),
            kind: ActiveValue::Set(self.kind),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_maintenance_record(
    db: &DatabaseConnection,
    vehicle_id: i32,
) -> Result<entity::maintenance_record::Model, DbErr> {
    MaintenanceRecordFactory::new(db, vehicle_id).build().await
}
