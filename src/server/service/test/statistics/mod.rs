use crate::server::{error::AppError, service::statistics::StatisticsService};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod generate;

/// Fixed generation instant used by the statistics tests.
fn report_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
}
