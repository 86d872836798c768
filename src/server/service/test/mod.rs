mod audit_log;
mod auth;
mod booking;
mod maintenance;
mod statistics;
mod user;
mod vehicle;
