//! Monthly fleet statistics.
//!
//! Builds the whole report from read-only aggregate queries. Any failed query discards the
//! report; partial statistics are never returned.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{statistics::StatisticsRepository, vehicle::VehicleRepository},
    error::{statistics::StatisticsError, AppError},
    model::{
        statistics::{
            DriveTime, Kilometers, MonthComparison, StatisticsReport, DEFAULT_DEPARTMENTS,
            DEFAULT_FUEL_TYPES, KILOMETERS_TOTAL, UNCATEGORIZED_BRAND,
        },
        vehicle::Vehicle,
    },
    util::time::{year_window, MonthWindow},
};

pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates the report for the calendar month containing `now`.
    ///
    /// Calling this twice with the same `now` and unchanged data yields equal reports.
    ///
    /// # Returns
    /// - `Ok(StatisticsReport)` - Complete report
    /// - `Err(AppError::StatisticsErr)` - A section query failed
    pub async fn generate(&self, now: DateTime<Utc>) -> Result<StatisticsReport, AppError> {
        let repo = StatisticsRepository::new(self.db);
        let window = MonthWindow::containing(now);

        let vehicles = VehicleRepository::new(self.db)
            .get_all()
            .await
            .map_err(StatisticsError::query_failed("vehicles"))?;

        let inspection_costs = self.inspection_costs(&repo, now).await?;
        let drive_time = self.drive_time(&repo, &window, &vehicles).await?;
        let fuel_consumption = self.fuel_consumption(&repo, &window).await?;
        let department_usage = self.department_usage(&repo, &window).await?;

        let total_pickups = repo
            .count_accepted_bookings(&window)
            .await
            .map_err(StatisticsError::query_failed("pickups"))?;
        let last_month_pickups = repo
            .count_accepted_bookings(&window.previous())
            .await
            .map_err(StatisticsError::query_failed("pickups"))?;

        let this_month =
            MonthComparison::new(total_pickups, last_month_pickups, drive_time.total_hours);

        Ok(StatisticsReport {
            generated_at: now,
            window,
            inspection_costs,
            drive_time,
            kilometers: kilometers(&vehicles),
            fuel_consumption,
            department_usage,
            this_month,
        })
    }

    async fn inspection_costs(
        &self,
        repo: &StatisticsRepository<'_, DatabaseConnection>,
        now: DateTime<Utc>,
    ) -> Result<[f64; 12], AppError> {
        let (start, end) = year_window(now);

        let rows = repo
            .get_inspection_costs(start, end)
            .await
            .map_err(StatisticsError::query_failed("inspection costs"))?;

        let mut costs = [0.0; 12];
        for (date, cost) in rows {
            costs[date.month0() as usize] += cost;
        }

        Ok(costs)
    }

    /// Sums recorded drive time per brand.
    ///
    /// Without drive time recorded for the current month every brand in the fleet is reported
    /// at zero hours. Rows from earlier months do not prevent this fallback.
    async fn drive_time(
        &self,
        repo: &StatisticsRepository<'_, DatabaseConnection>,
        window: &MonthWindow,
        vehicles: &[Vehicle],
    ) -> Result<DriveTime, AppError> {
        let (first, last) = window.dates();

        let rows = repo
            .get_drive_time_by_brand(first, last)
            .await
            .map_err(StatisticsError::query_failed("drive time"))?;

        let mut by_brand: BTreeMap<String, f64> = BTreeMap::new();
        for (brand, hours) in rows {
            let brand = brand
                .filter(|b| !b.trim().is_empty())
                .unwrap_or_else(|| UNCATEGORIZED_BRAND.to_string());
            *by_brand.entry(brand).or_insert(0.0) += hours;
        }

        if by_brand.is_empty() {
            by_brand = vehicles
                .iter()
                .filter_map(Vehicle::brand)
                .map(|brand| (brand.to_string(), 0.0))
                .collect();
        }

        let total_hours = by_brand.values().sum();

        Ok(DriveTime {
            total_hours,
            by_brand,
        })
    }

    async fn fuel_consumption(
        &self,
        repo: &StatisticsRepository<'_, DatabaseConnection>,
        window: &MonthWindow,
    ) -> Result<BTreeMap<String, f64>, AppError> {
        let rows = repo
            .get_fuel_liters_by_type(window.start)
            .await
            .map_err(StatisticsError::query_failed("fuel consumption"))?;

        let mut consumption: BTreeMap<String, f64> = BTreeMap::new();
        for (fuel_type, liters) in rows {
            *consumption.entry(fuel_type).or_insert(0.0) += liters;
        }

        if consumption.is_empty() {
            consumption = DEFAULT_FUEL_TYPES
                .iter()
                .map(|fuel_type| (fuel_type.to_string(), 0.0))
                .collect();
        }

        Ok(consumption)
    }

    /// Share of accepted bookings per department in percent.
    async fn department_usage(
        &self,
        repo: &StatisticsRepository<'_, DatabaseConnection>,
        window: &MonthWindow,
    ) -> Result<BTreeMap<String, f64>, AppError> {
        let rows = repo
            .get_accepted_bookings_by_department(window)
            .await
            .map_err(StatisticsError::query_failed("department usage"))?;

        let total: i64 = rows.iter().map(|(_, count)| count).sum();

        let mut usage: BTreeMap<String, f64> = BTreeMap::new();
        if total > 0 {
            for (department, count) in rows {
                let Some(department) = department.filter(|d| !d.trim().is_empty()) else {
                    continue;
                };
                *usage.entry(department).or_insert(0.0) += count as f64 / total as f64 * 100.0;
            }
        }

        if usage.is_empty() {
            usage = DEFAULT_DEPARTMENTS
                .iter()
                .map(|department| (department.to_string(), 0.0))
                .collect();
        }

        Ok(usage)
    }
}

fn kilometers(vehicles: &[Vehicle]) -> Kilometers {
    Kilometers {
        total: KILOMETERS_TOTAL,
        by_vehicle: vehicles
            .iter()
            .map(|vehicle| (vehicle.license_plate.clone(), vehicle.odometer))
            .collect(),
    }
}
