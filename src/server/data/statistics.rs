//! Read-only aggregate queries backing the statistics report.
//!
//! Each query returns raw grouped values; defaults and percentages are applied by the
//! statistics service.

use crate::server::{
    model::{
        booking::BookingStatus, maintenance::MaintenanceKind,
        statistics::DRIVE_TIME_CATEGORY,
    },
    util::time::MonthWindow,
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait,
};

pub struct StatisticsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatisticsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets date and cost of every inspection in `[start, end)`.
    ///
    /// # Returns
    /// - `Ok(Vec<(date, cost)>)` - One tuple per inspection record
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_inspection_costs(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<(DateTime<Utc>, f64)>, DbErr> {
        entity::prelude::MaintenanceRecord::find()
            .select_only()
            .column(entity::maintenance_record::Column::Date)
            .column(entity::maintenance_record::Column::Cost)
            .filter(entity::maintenance_record::Column::Kind.eq(MaintenanceKind::INSPECTION))
            .filter(entity::maintenance_record::Column::Date.gte(start))
            .filter(entity::maintenance_record::Column::Date.lt(end))
            .into_tuple::<(DateTime<Utc>, f64)>()
            .all(self.db)
            .await
    }

    /// Sums drive time hours per sub-category for rows dated between `first` and `last`
    /// inclusive.
    pub async fn get_drive_time_by_brand(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<(Option<String>, f64)>, DbErr> {
        entity::prelude::StatisticsData::find()
            .select_only()
            .column(entity::statistics_data::Column::SubCategory)
            .column_as(entity::statistics_data::Column::Value.sum(), "hours")
            .filter(entity::statistics_data::Column::Category.eq(DRIVE_TIME_CATEGORY))
            .filter(entity::statistics_data::Column::Date.between(first, last))
            .group_by(entity::statistics_data::Column::SubCategory)
            .into_tuple::<(Option<String>, f64)>()
            .all(self.db)
            .await
    }

    /// Sums liters per fuel type for logs dated on or after `since`.
    pub async fn get_fuel_liters_by_type(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<(String, f64)>, DbErr> {
        entity::prelude::FuelLog::find()
            .select_only()
            .column(entity::fuel_log::Column::FuelType)
            .column_as(entity::fuel_log::Column::Liters.sum(), "liters")
            .filter(entity::fuel_log::Column::Date.gte(since))
            .group_by(entity::fuel_log::Column::FuelType)
            .into_tuple::<(String, f64)>()
            .all(self.db)
            .await
    }

    /// Counts accepted bookings that start and end inside the window.
    pub async fn count_accepted_bookings(&self, window: &MonthWindow) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Accepted.as_str()))
            .filter(entity::booking::Column::StartTime.gte(window.start))
            .filter(entity::booking::Column::EndTime.lt(window.end))
            .count(self.db)
            .await
    }

    /// Counts accepted bookings inside the window per department of the booking user.
    ///
    /// Users without a department are grouped under `None`.
    pub async fn get_accepted_bookings_by_department(
        &self,
        window: &MonthWindow,
    ) -> Result<Vec<(Option<String>, i64)>, DbErr> {
        entity::prelude::Booking::find()
            .select_only()
            .column(entity::user::Column::Department)
            .column_as(entity::booking::Column::Id.count(), "bookings")
            .join(JoinType::InnerJoin, entity::booking::Relation::User.def())
            .filter(entity::booking::Column::Status.eq(BookingStatus::Accepted.as_str()))
            .filter(entity::booking::Column::StartTime.gte(window.start))
            .filter(entity::booking::Column::EndTime.lt(window.end))
            .group_by(entity::user::Column::Department)
            .into_tuple::<(Option<String>, i64)>()
            .all(self.db)
            .await
    }
}
