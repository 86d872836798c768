//! Date parsing and calendar month windows.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::server::error::validation::ValidationError;

/// Formats accepted for timestamps without an offset, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a timestamp from RFC 3339, a `datetime-local` style value, or a bare date.
///
/// Values without an offset are taken as UTC; a bare date means midnight.
pub fn parse_datetime(field: &'static str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Parses an optional timestamp, treating blank input as absent.
pub fn parse_optional_datetime(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_datetime(field, value).map(Some),
        None => Ok(None),
    }
}

/// Parses an optional date, treating blank input as absent.
pub fn parse_optional_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_date(field, value).map(Some),
        None => Ok(None),
    }
}

/// Half-open UTC interval `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// Window of the calendar month containing `now`.
    pub fn containing(now: DateTime<Utc>) -> Self {
        let first = first_of_month(now.date_naive());
        let next_month_day = first + Duration::days(32);

        Self {
            start: midnight(first),
            end: midnight(first_of_month(next_month_day)),
        }
    }

    /// Window of the calendar month before this one.
    pub fn previous(&self) -> Self {
        let last_of_previous = self.start.date_naive() - Duration::days(1);

        Self {
            start: midnight(first_of_month(last_of_previous)),
            end: self.start,
        }
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// First and last calendar day covered, both inclusive.
    pub fn dates(&self) -> (NaiveDate, NaiveDate) {
        (
            self.start.date_naive(),
            self.end.date_naive() - Duration::days(1),
        )
    }
}

/// Half-open UTC interval `[Jan 1, Jan 1 of the next year)` of the year containing `now`.
pub fn year_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = now.date_naive();
    let first = date - Duration::days(i64::from(date.ordinal0()));
    let past_year_end = first + Duration::days(366);
    let next = past_year_end - Duration::days(i64::from(past_year_end.ordinal0()));

    (midnight(first), midnight(next))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
