use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatisticsData::Table)
                    .if_not_exists()
                    .col(pk_auto(StatisticsData::Id))
                    .col(date(StatisticsData::Date))
                    .col(string(StatisticsData::Category))
                    .col(string_null(StatisticsData::SubCategory))
                    .col(double(StatisticsData::Value))
                    .col(string_null(StatisticsData::Unit))
                    .col(json_null(StatisticsData::ExtraInfo))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_statistics_data_category_date")
                    .table(StatisticsData::Table)
                    .col(StatisticsData::Category)
                    .col(StatisticsData::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatisticsData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StatisticsData {
    Table,
    Id,
    Date,
    Category,
    SubCategory,
    Value,
    Unit,
    ExtraInfo,
}
