//! SeaORM entities for the fleet management schema.

pub mod prelude;

pub mod audit_log;
pub mod booking;
pub mod damage_report;
pub mod fuel_log;
pub mod maintenance_record;
pub mod statistics_data;
pub mod user;
pub mod vehicle;
pub mod vehicle_document;
