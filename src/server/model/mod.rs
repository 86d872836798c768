//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types validate raw request
//! input before it reaches the service layer.

pub mod audit_log;
pub mod booking;
pub mod damage_report;
pub mod document;
pub mod fuel_log;
pub mod maintenance;
pub mod statistics;
pub mod user;
pub mod vehicle;
