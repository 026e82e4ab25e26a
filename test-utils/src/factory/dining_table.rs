//! Dining table factory.
//!
//! Tables are created `available` with no area unless configured otherwise.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::TableState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dining tables.
///
/// # Example
///
/// ```rust,ignore
/// let table = DiningTableFactory::new(&db)
///     .code("T-07")
///     .state(TableState::Occupied)
///     .build()
///     .await?;
/// ```
pub struct DiningTableFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    capacity: i32,
    state: TableState,
    area_id: Option<i32>,
    notes: Option<String>,
}

impl<'a> DiningTableFactory<'a> {
    /// Creates a new DiningTableFactory with default values.
    ///
    /// Defaults:
    /// - code: `"T-{id}"`
    /// - capacity: `4`
    /// - state: `TableState::Available`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            code: format!("T-{}", next_id()),
            capacity: 4,
            state: TableState::Available,
            area_id: None,
            notes: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn state(mut self, state: TableState) -> Self {
        self.state = state;
        self
    }

    pub fn area_id(mut self, area_id: Option<i32>) -> Self {
        self.area_id = area_id;
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Builds and inserts the dining table.
    ///
    /// # Returns
    /// - `Ok(entity::dining_table::Model)` - Created table
    /// - `Err(DbErr)` - Database error during insert (duplicate code, missing area)
    pub async fn build(self) -> Result<entity::dining_table::Model, DbErr> {
        entity::dining_table::ActiveModel {
            code: ActiveValue::Set(self.code),
            capacity: ActiveValue::Set(self.capacity),
            state: ActiveValue::Set(self.state),
            area_id: ActiveValue::Set(self.area_id),
            notes: ActiveValue::Set(self.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available table with default values.
pub async fn create_table(db: &DatabaseConnection) -> Result<entity::dining_table::Model, DbErr> {
    DiningTableFactory::new(db).build().await
}

/// Creates an available table with a specific code.
pub async fn create_table_with_code(
    db: &DatabaseConnection,
    code: impl Into<String>,
) -> Result<entity::dining_table::Model, DbErr> {
    DiningTableFactory::new(db).code(code).build().await
}
