use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_vehicle_table::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRecord::Id))
                    .col(integer(MaintenanceRecord::VehicleId))
                    .col(timestamp(MaintenanceRecord::Date))
                    .col(string(MaintenanceRecord::Description))
                    .col(double(MaintenanceRecord::Cost).default(0.0))
                    .col(integer_null(MaintenanceRecord::Odometer))
                    .col(string_null(MaintenanceRecord::PerformedBy))
                    .col(string_null(MaintenanceRecord::Kind))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_record_vehicle_id")
                            .from(MaintenanceRecord::Table, MaintenanceRecord::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRecord {
    Table,
    Id,
    VehicleId,
    Date,
    Description,
    Cost,
    Odometer,
    PerformedBy,
    Kind,
}
