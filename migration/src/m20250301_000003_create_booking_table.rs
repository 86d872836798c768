use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_vehicle_table::Vehicle,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::VehicleId))
                    .col(integer(Booking::UserId))
                    .col(timestamp(Booking::StartTime))
                    .col(timestamp(Booking::EndTime))
                    .col(string(Booking::Status).default("requested"))
                    .col(string(Booking::Purpose).default(""))
                    .col(string(Booking::VehicleSize).default(""))
                    .col(integer_null(Booking::ApprovedBy))
                    .col(timestamp_null(Booking::ApprovedAt))
                    .col(integer_null(Booking::EndOdometer))
                    .col(integer_null(Booking::EndFuelLevel))
                    .col(text_null(Booking::ReturnNotes))
                    .col(timestamp_null(Booking::ReturnedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_vehicle_id")
                            .from(Booking::Table, Booking::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_approved_by")
                            .from(Booking::Table, Booking::ApprovedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_status_start_time")
                    .table(Booking::Table)
                    .col(Booking::Status)
                    .col(Booking::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    VehicleId,
    UserId,
    StartTime,
    EndTime,
    Status,
    Purpose,
    VehicleSize,
    ApprovedBy,
    ApprovedAt,
    EndOdometer,
    EndFuelLevel,
    ReturnNotes,
    ReturnedAt,
}
