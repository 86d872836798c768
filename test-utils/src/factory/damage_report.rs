//! Damage report factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for test damage reports, defaulting to a freshly reported scratch.
pub struct DamageReportFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    description: String,
    status: String,
    repair_cost: Option<f64>,
}

impl<'a> DamageReportFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32) -> Self {
        Self {
            db,
            vehicle_id,
            description: "Kratzer an der Fahrertür".to_string(),
            status: "reported".to_string(),
            repair_cost: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn repair_cost(mut self, repair_cost: f64) -> Self {
        self.repair_cost = Some(repair_cost);
        self
    }

    pub async fn build(self) -> Result<entity::damage_report::Model, DbErr> {
        entity::damage_report::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            date: ActiveValue::Set(Utc::now()),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            images: ActiveValue::Set(None),
            repair_cost: ActiveValue::Set(self.repair_cost),
            repaired_date: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_damage_report(
    db: &DatabaseConnection,
    vehicle_id: i32,
) -> Result<entity::damage_report::Model, DbErr> {
    DamageReportFactory::new(db, vehicle_id).build().await
}
