use crate::server::{data::fuel_log::FuelLogRepository, model::fuel_log::FuelLogParam};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn param(liters: f64, price_per_liter: f64) -> FuelLogParam {
    FuelLogParam {
        date: Utc::now(),
        liters,
        price_per_liter,
        odometer: 15500,
        fuel_type: "Super".to_string(),
    }
}
