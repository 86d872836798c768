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
                    .table(VehicleDocument::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleDocument::Id))
                    .col(integer(VehicleDocument::VehicleId))
                    .col(string(VehicleDocument::Name))
                    .col(string(VehicleDocument::FilePath))
                    .col(
                        timestamp(VehicleDocument::UploadDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(VehicleDocument::DocumentType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_document_vehicle_id")
                            .from(VehicleDocument::Table, VehicleDocument::VehicleId)
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
            .drop_table(Table::drop().table(VehicleDocument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VehicleDocument {
    Table,
    Id,
    VehicleId,
    Name,
    FilePath,
    UploadDate,
    DocumentType,
}
