use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables (and any raw statements such as partial indexes), then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{TableArea, DiningTable};
///
/// let test = TestBuilder::new()
///     .with_table(TableArea)
///     .with_table(DiningTable)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Raw SQL executed after all tables exist.
    statements: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign keys
    /// after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a raw SQL statement executed once every table has been created.
    pub fn with_statement(mut self, sql: impl Into<String>) -> Self {
        self.statements.push(sql.into());
        self
    }

    /// Adds every table of the restaurant schema in dependency order.
    ///
    /// Also installs the partial unique index limiting each table to one current bill, so
    /// tests exercise the same storage constraint as the migrated database.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_restaurant_tables(self) -> Self {
        self.with_table(User)
            .with_table(TableArea)
            .with_table(DiningTable)
            .with_table(PlateCategory)
            .with_table(Plate)
            .with_table(Reservation)
            .with_table(Bill)
            .with_table(BillPlate)
            .with_table(Review)
            .with_statement(migration::CREATE_BILL_CURRENT_TABLE_INDEX)
    }

    /// Builds and initializes the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and schema ready
    /// - `Err(TestError::Database)` - Failed to connect or to create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.execute_statements(&self.statements).await?;

        Ok(setup)
    }
}
