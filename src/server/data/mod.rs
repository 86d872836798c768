//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! entity types out of the service and controller layers. All queries, inserts, updates
//! and deletes go through these repositories.

pub mod audit_log;
pub mod booking;
pub mod damage_report;
pub mod document;
pub mod fuel_log;
pub mod maintenance;
pub mod statistics;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
