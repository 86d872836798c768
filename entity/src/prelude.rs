pub use super::audit_log::Entity as AuditLog;
pub use super::booking::Entity as Booking;
pub use super::damage_report::Entity as DamageReport;
pub use super::fuel_log::Entity as FuelLog;
pub use super::maintenance_record::Entity as MaintenanceRecord;
pub use super::statistics_data::Entity as StatisticsData;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_document::Entity as VehicleDocument;
