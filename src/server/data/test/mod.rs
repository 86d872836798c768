mod audit_log;
mod booking;
mod damage_report;
mod document;
mod fuel_log;
mod maintenance;
mod statistics;
mod user;
mod vehicle;
