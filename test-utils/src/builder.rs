use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder collecting the tables a test needs before the database is created.
///
/// Tables are created in the order they are added, so referenced tables must come before the
/// tables pointing at them.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Vehicle)
///     .with_table(Booking)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder without any tables.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table of a SeaORM entity using SQLite syntax.
    ///
    /// Foreign keys declared through `belongs_to` relations are part of the generated
    /// statement.
    ///
    /// # Arguments
    /// - `entity` - Entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table of the fleet schema in dependency order.
    ///
    /// - User
    /// - Vehicle
    /// - Booking
    /// - MaintenanceRecord
    /// - FuelLog
    /// - DamageReport
    /// - VehicleDocument
    /// - AuditLog
    /// - StatisticsData
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_fleet_tables(self) -> Self {
        self.with_table(User)
            .with_table(Vehicle)
            .with_table(Booking)
            .with_table(MaintenanceRecord)
            .with_table(FuelLog)
            .with_table(DamageReport)
            .with_table(VehicleDocument)
            .with_table(AuditLog)
            .with_table(StatisticsData)
    }

    /// Creates the in-memory database and runs the collected CREATE TABLE statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the database ready
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
