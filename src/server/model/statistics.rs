//! Statistics report domain model.
//!
//! The report summarizes fleet usage for the calendar month containing the generation
//! instant and compares it with the previous month. Every breakdown is an ordered map so
//! serialization is stable for a fixed dataset and instant.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{
    model::statistics::{
        DeviceStatsDto, DriveTimeDto, KilometersDto, MonthlyAmountsDto, ReportPeriodDto,
        StatisticsDto, ThisMonthDto,
    },
    server::util::time::MonthWindow,
};

/// Category of `statistics_data` rows holding drive time hours per brand.
pub const DRIVE_TIME_CATEGORY: &str = "drive_time";

/// Breakdown key for drive time rows without a sub-category.
pub const UNCATEGORIZED_BRAND: &str = "other";

/// Total kilometers reported until trip distances are recorded.
pub const KILOMETERS_TOTAL: f64 = 0.0;

/// Fixed share of mobile sessions in percent.
pub const DEVICE_MOBILE_SHARE: u32 = 73;

/// Fixed share of desktop sessions in percent.
pub const DEVICE_DESKTOP_SHARE: u32 = 27;

/// Last month's drive time is estimated as this fraction of the current month.
pub const LAST_MONTH_DRIVE_TIME_FACTOR: f64 = 0.9;

/// Fuel types reported at zero when no fuel was logged this month.
pub const DEFAULT_FUEL_TYPES: [&str; 5] = ["Diesel", "Super", "Super Plus", "Strom", "Auto Gas"];

/// Departments reported at zero when no department has accepted bookings.
pub const DEFAULT_DEPARTMENTS: [&str; 5] =
    ["IT", "Vertrieb", "Produktion", "Verwaltung", "Marketing"];

/// Relative change from `previous` to `current` in percent.
///
/// A change from zero is 100 when anything happened and 0 otherwise.
pub fn percentage_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (current - previous) / previous * 100.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriveTime {
    pub total_hours: f64,
    pub by_brand: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Kilometers {
    pub total: f64,
    /// Current odometer keyed by license plate.
    pub by_vehicle: BTreeMap<String, i32>,
}

/// Current month compared with the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthComparison {
    pub total_pickups: u64,
    pub last_month_pickups: u64,
    pub pickups_change_abs: i64,
    pub pickups_change_pct: f64,
    pub drive_time_hours: f64,
    pub last_month_drive_time_hours: f64,
    pub drive_time_change_abs: f64,
    pub drive_time_change_pct: f64,
}

impl MonthComparison {
    /// Derives the comparison from pickup counts and the current month's drive time.
    pub fn new(total_pickups: u64, last_month_pickups: u64, drive_time_hours: f64) -> Self {
        let last_month_drive_time_hours = drive_time_hours * LAST_MONTH_DRIVE_TIME_FACTOR;

        Self {
            total_pickups,
            last_month_pickups,
            pickups_change_abs: total_pickups as i64 - last_month_pickups as i64,
            pickups_change_pct: percentage_change(
                last_month_pickups as f64,
                total_pickups as f64,
            ),
            drive_time_hours,
            last_month_drive_time_hours,
            drive_time_change_abs: drive_time_hours - last_month_drive_time_hours,
            drive_time_change_pct: percentage_change(
                last_month_drive_time_hours,
                drive_time_hours,
            ),
        }
    }
}

/// Monthly fleet statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub generated_at: DateTime<Utc>,
    pub window: MonthWindow,
    /// Inspection costs of the current year, indexed by zero-based month.
    pub inspection_costs: [f64; 12],
    pub drive_time: DriveTime,
    pub kilometers: Kilometers,
    /// Liters per fuel type logged this month.
    pub fuel_consumption: BTreeMap<String, f64>,
    /// Share of accepted bookings per department in percent.
    pub department_usage: BTreeMap<String, f64>,
    pub this_month: MonthComparison,
}

impl StatisticsReport {
    pub fn into_dto(self) -> StatisticsDto {
        StatisticsDto {
            generated_at: self.generated_at,
            period: ReportPeriodDto {
                year: self.window.year(),
                month: self.window.month(),
                start: self.window.start,
                end: self.window.end,
            },
            inspection_costs: MonthlyAmountsDto(self.inspection_costs),
            drive_time: DriveTimeDto {
                total_hours: self.drive_time.total_hours,
                by_brand: self.drive_time.by_brand,
            },
            kilometers: KilometersDto {
                total: self.kilometers.total,
                by_vehicle: self.kilometers.by_vehicle,
            },
            fuel_consumption: self.fuel_consumption,
            department_usage: self.department_usage,
            device_stats: DeviceStatsDto {
                mobile: DEVICE_MOBILE_SHARE,
                desktop: DEVICE_DESKTOP_SHARE,
            },
            this_month: ThisMonthDto {
                total_pickups: self.this_month.total_pickups,
                last_month_pickups: self.this_month.last_month_pickups,
                pickups_change_abs: self.this_month.pickups_change_abs,
                pickups_change_pct: self.this_month.pickups_change_pct,
                drive_time_hours: self.this_month.drive_time_hours,
                last_month_drive_time_hours: self.this_month.last_month_drive_time_hours,
                drive_time_change_abs: self.this_month.drive_time_change_abs,
                drive_time_change_pct: self.this_month.drive_time_change_pct,
            },
        }
    }
}
