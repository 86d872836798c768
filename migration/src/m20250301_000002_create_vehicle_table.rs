use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Model))
                    .col(string_uniq(Vehicle::LicensePlate))
                    .col(string_null(Vehicle::Image))
                    .col(string(Vehicle::Status).default("available"))
                    .col(integer(Vehicle::Odometer).default(0))
                    .col(integer(Vehicle::FuelLevel).default(100))
                    .col(timestamp_null(Vehicle::LastService))
                    .col(timestamp_null(Vehicle::NextService))
                    .col(date_null(Vehicle::InspectionDue))
                    .col(date_null(Vehicle::EmissionsTestDue))
                    .col(
                        timestamp(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Model,
    LicensePlate,
    Image,
    Status,
    Odometer,
    FuelLevel,
    LastService,
    NextService,
    InspectionDue,
    EmissionsTestDue,
    CreatedAt,
}
