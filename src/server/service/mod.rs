//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing rules such as restricted deletes and booking ownership
//! - **Orchestration**: Keeping vehicles in step with bookings, fuel logs and maintenance
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Side Effects**: Audit entries, stored files and image lookups

pub mod audit_log;
pub mod auth;
pub mod booking;
pub mod damage_report;
pub mod document;
pub mod fuel_log;
pub mod image;
pub mod maintenance;
pub mod statistics;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
