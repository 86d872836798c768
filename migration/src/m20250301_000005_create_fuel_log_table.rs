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
                    .table(FuelLog::Table)
                    .if_not_exists()
                    .col(pk_auto(FuelLog::Id))
                    .col(integer(FuelLog::VehicleId))
                    .col(timestamp(FuelLog::Date))
                    .col(double(FuelLog::Liters))
                    .col(double(FuelLog::PricePerLiter))
                    .col(double(FuelLog::TotalCost))
                    .col(integer(FuelLog::Odometer))
                    .col(string(FuelLog::FuelType).default("Diesel"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fuel_log_vehicle_id")
                            .from(FuelLog::Table, FuelLog::VehicleId)
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
            .drop_table(Table::drop().table(FuelLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FuelLog {
    Table,
    Id,
    VehicleId,
    Date,
    Liters,
    PricePerLiter,
    TotalCost,
    Odometer,
    FuelType,
}
