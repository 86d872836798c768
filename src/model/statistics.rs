use chrono::{DateTime, Utc};
use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Month keys of the yearly breakdowns, in calendar order.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatisticsDto {
    pub generated_at: DateTime<Utc>,
    pub period: ReportPeriodDto,
    #[schema(value_type = BTreeMap<String, f64>)]
    pub inspection_costs: MonthlyAmountsDto,
    pub drive_time: DriveTimeDto,
    pub kilometers: KilometersDto,
    pub fuel_consumption: BTreeMap<String, f64>,
    pub department_usage: BTreeMap<String, f64>,
    pub device_stats: DeviceStatsDto,
    pub this_month: ThisMonthDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReportPeriodDto {
    pub year: i32,
    pub month: u32,
    /// First instant of the month.
    pub start: DateTime<Utc>,
    /// First instant of the following month (exclusive).
    pub end: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DriveTimeDto {
    pub total_hours: f64,
    pub by_brand: BTreeMap<String, f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct KilometersDto {
    pub total: f64,
    /// Current odometer reading keyed by license plate.
    pub by_vehicle: BTreeMap<String, i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeviceStatsDto {
    pub mobile: u32,
    pub desktop: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ThisMonthDto {
    pub total_pickups: u64,
    pub last_month_pickups: u64,
    pub pickups_change_abs: i64,
    pub pickups_change_pct: f64,
    pub drive_time_hours: f64,
    pub last_month_drive_time_hours: f64,
    pub drive_time_change_abs: f64,
    pub drive_time_change_pct: f64,
}

/// Twelve monthly amounts, serialized as a map keyed by month abbreviation in calendar order.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct MonthlyAmountsDto(pub [f64; 12]);

impl MonthlyAmountsDto {
    /// Amount for a month abbreviation such as `"Mar"`.
    pub fn get(&self, month: &str) -> Option<f64> {
        MONTH_ABBREVIATIONS
            .iter()
            .position(|m| *m == month)
            .map(|index| self.0[index])
    }
}

impl Serialize for MonthlyAmountsDto {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MONTH_ABBREVIATIONS.len()))?;
        for (month, amount) in MONTH_ABBREVIATIONS.iter().zip(self.0.iter()) {
            map.serialize_entry(month, amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MonthlyAmountsDto {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, f64>::deserialize(deserializer)?;

        let mut amounts = [0.0; 12];
        for (amount, month) in amounts.iter_mut().zip(MONTH_ABBREVIATIONS.iter()) {
            *amount = map.get(*month).copied().unwrap_or(0.0);
        }

        Ok(Self(amounts))
    }
}
