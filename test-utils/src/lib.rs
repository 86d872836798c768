//! Fuhrpark Test Utils
//!
//! Shared helpers for the repository and service tests of the fleet backend. Tests get an
//! in-memory SQLite database with exactly the tables they ask for, an optional session backed
//! by the same database, and factories that insert rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: configures which entity tables exist in the test database
//! - **TestContext**: owns the database connection and the session
//! - **TestError**: setup failures
//! - **factory**: builders inserting vehicles, users, bookings and logbook rows
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_vehicles() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let vehicle = factory::create_vehicle(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
