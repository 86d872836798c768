//! Factory for pre-aggregated statistics rows.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for `statistics_data` rows.
///
/// Defaults: today, category `"drive_time"`, no sub-category, value `0.0`, unit `"h"`.
pub struct StatisticsDataFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    category: String,
    sub_category: Option<String>,
    value: f64,
    unit: Option<String>,
}

impl<'a> StatisticsDataFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            date: Utc::now().date_naive(),
            category: "drive_time".to_string(),
            sub_category: None,
            value: 0.0,
            unit: Some("h".to_string()),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub async fn build(self) -> Result<entity::statistics_data::Model, DbErr> {
        entity::statistics_data::ActiveModel {
            date: ActiveValue::Set(self.date),
            category: ActiveValue::Set(self.category),
            sub_category: ActiveValue::Set(self.sub_category),
            value: ActiveValue::Set(self.value),
            unit: ActiveValue::Set(self.unit),
            extra_info: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
