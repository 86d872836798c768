pub mod audit_log;
pub mod auth;
pub mod booking;
pub mod damage_report;
pub mod document;
pub mod fuel_log;
pub mod maintenance;
pub mod statistics;
pub mod user;
pub mod vehicle;
