//! Factories inserting test rows with sensible defaults.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` shorthand for the
//! defaults. Factories never create their dependencies implicitly; pass the ids of rows created
//! beforehand, or use the combinators in `helpers`.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let vehicle = factory::VehicleFactory::new(db)
//!     .model("VW Golf")
//!     .odometer(15000)
//!     .build()
//!     .await?;
//! let booking = factory::BookingFactory::new(db, vehicle.id, user.id)
//!     .accepted()
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod damage_report;
pub mod fuel_log;
pub mod helpers;
pub mod maintenance_record;
pub mod statistics_data;
pub mod user;
pub mod vehicle;

pub use booking::{create_booking, BookingFactory};
pub use damage_report::{create_damage_report, DamageReportFactory};
pub use fuel_log::{create_fuel_log, FuelLogFactory};
pub use maintenance_record::{create_maintenance_record, MaintenanceRecordFactory};
pub use statistics_data::StatisticsDataFactory;
pub use user::{create_user, create_user_in_department, UserFactory};
pub use vehicle::{create_vehicle, VehicleFactory};
