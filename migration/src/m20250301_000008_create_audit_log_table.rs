use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key on vehicle_id, history must survive vehicle deletion
        manager
            .create_table(
                Table::create()
                    .table(AuditLog::Table)
                    .if_not_exists()
                    .col(pk_auto(AuditLog::Id))
                    .col(
                        timestamp(AuditLog::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(AuditLog::Action))
                    .col(string_null(AuditLog::Actor))
                    .col(integer_null(AuditLog::VehicleId))
                    .col(text_null(AuditLog::Description))
                    .col(text_null(AuditLog::OldValues))
                    .col(text_null(AuditLog::NewValues))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_audit_log_vehicle_id")
                    .table(AuditLog::Table)
                    .col(AuditLog::VehicleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuditLog {
    Table,
    Id,
    Timestamp,
    Action,
    Actor,
    VehicleId,
    Description,
    OldValues,
    NewValues,
}
