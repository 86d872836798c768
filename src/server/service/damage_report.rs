use sea_orm::DatabaseConnection;

use crate::server::{
    data::damage_report::DamageReportRepository,
    error::AppError,
    model::damage_report::{CreateDamageReportParam, DamageReport, UpdateDamageReportParam},
    service::vehicle::require_vehicle,
};

pub struct DamageReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DamageReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_vehicle(&self, vehicle_id: i32) -> Result<Vec<DamageReport>, AppError> {
        require_vehicle(self.db, vehicle_id).await?;

        Ok(DamageReportRepository::new(self.db)
            .get_by_vehicle(vehicle_id)
            .await?)
    }

    /// Files a new damage report with status reported
    pub async fn create(&self, param: CreateDamageReportParam) -> Result<DamageReport, AppError> {
        require_vehicle(self.db, param.vehicle_id).await?;

        let report = DamageReportRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Damage report {} filed for vehicle {}",
            report.id,
            report.vehicle_id
        );

        Ok(report)
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateDamageReportParam,
    ) -> Result<DamageReport, AppError> {
        self.get_by_id(id).await?;

        Ok(DamageReportRepository::new(self.db).update(id, param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get_by_id(id).await?;

        DamageReportRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> Result<DamageReport, AppError> {
        DamageReportRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Damage report {} not found", id)))
    }
}
