//! Damage report data repository for database operations.

use crate::server::model::damage_report::{
    CreateDamageReportParam, DamageReport, DamageStatus, UpdateDamageReportParam,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct DamageReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DamageReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the damage reports of a vehicle, newest first.
    pub async fn get_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<DamageReport>, DbErr> {
        entity::prelude::DamageReport::find()
            .filter(entity::damage_report::Column::VehicleId.eq(vehicle_id))
            .order_by_desc(entity::damage_report::Column::Date)
            .order_by_desc(entity::damage_report::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(DamageReport::from_entity)
            .collect()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DamageReport>, DbErr> {
        entity::prelude::DamageReport::find_by_id(id)
            .one(self.db)
            .await?
            .map(DamageReport::from_entity)
            .transpose()
    }

    /// Files a new report in the reported state.
    pub async fn create(&self, param: CreateDamageReportParam) -> Result<DamageReport, DbErr> {
        let entity = entity::damage_report::ActiveModel {
            vehicle_id: ActiveValue::Set(param.vehicle_id),
            date: ActiveValue::Set(param.date),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(DamageStatus::Reported.as_str().to_string()),
            images: ActiveValue::Set(Some(serde_json::json!(param.images))),
            repair_cost: ActiveValue::Set(param.repair_cost),
            repaired_date: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        DamageReport::from_entity(entity)
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateDamageReportParam,
    ) -> Result<DamageReport, DbErr> {
        let report = entity::prelude::DamageReport::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Damage report {} not found",
                id
            )))?;

        let mut active_model: entity::damage_report::ActiveModel = report.into();

        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(images) = param.images {
            active_model.images = ActiveValue::Set(Some(serde_json::json!(images)));
        }
        if let Some(repair_cost) = param.repair_cost {
            active_model.repair_cost = ActiveValue::Set(Some(repair_cost));
        }
        if let Some(repaired_date) = param.repaired_date {
            active_model.repaired_date = ActiveValue::Set(Some(repaired_date));
        }

        DamageReport::from_entity(active_model.update(self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::DamageReport::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
