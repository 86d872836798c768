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
                    .table(DamageReport::Table)
                    .if_not_exists()
                    .col(pk_auto(DamageReport::Id))
                    .col(integer(DamageReport::VehicleId))
                    .col(timestamp(DamageReport::Date))
                    .col(text(DamageReport::Description))
                    .col(string(DamageReport::Status).default("reported"))
                    .col(json_null(DamageReport::Images))
                    .col(double_null(DamageReport::RepairCost))
                    .col(timestamp_null(DamageReport::RepairedDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_damage_report_vehicle_id")
                            .from(DamageReport::Table, DamageReport::VehicleId)
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
            .drop_table(Table::drop().table(DamageReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DamageReport {
    Table,
    Id,
    VehicleId,
    Date,
    Description,
    Status,
    Images,
    RepairCost,
    RepairedDate,
}
