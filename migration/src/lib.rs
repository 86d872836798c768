pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_vehicle_table;
mod m20250301_000003_create_booking_table;
mod m20250301_000004_create_maintenance_record_table;
mod m20250301_000005_create_fuel_log_table;
mod m20250301_000006_create_damage_report_table;
mod m20250301_000007_create_vehicle_document_table;
mod m20250301_000008_create_audit_log_table;
mod m20250301_000009_create_statistics_data_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_vehicle_table::Migration),
            Box::new(m20250301_000003_create_booking_table::Migration),
            Box::new(m20250301_000004_create_maintenance_record_table::Migration),
            Box::new(m20250301_000005_create_fuel_log_table::Migration),
            Box::new(m20250301_000006_create_damage_report_table::Migration),
            Box::new(m20250301_000007_create_vehicle_document_table::Migration),
            Box::new(m20250301_000008_create_audit_log_table::Migration),
            Box::new(m20250301_000009_create_statistics_data_table::Migration),
        ]
    }
}
