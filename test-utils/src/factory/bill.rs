//! Bill factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::BillState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bills.
///
/// Inserts the bill row only. The referenced table's state is left untouched, so tests that
/// depend on occupancy should create the table as `occupied` themselves.
///
/// # Example
///
/// ```rust,ignore
/// let bill = BillFactory::new(&db, table.id)
///     .waiter_id(Some(waiter.id))
///     .total(100.0)
///     .build()
///     .await?;
/// ```
pub struct BillFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    table_id: Option<i32>,
    waiter_id: Option<i32>,
    state: BillState,
    total: f64,
    total_paid: f64,
    tip: i32,
}

impl<'a> BillFactory<'a> {
    /// Creates a new BillFactory with default values.
    ///
    /// Defaults:
    /// - code: `"CUE-T{id}"` (zero padded to six characters)
    /// - no waiter
    /// - state: `BillState::Current`
    /// - totals and tip zero
    pub fn new(db: &'a DatabaseConnection, table_id: i32) -> Self {
        Self {
            db,
            code: format!("CUE-T{:05}", next_id()),
            table_id: Some(table_id),
            waiter_id: None,
            state: BillState::Current,
            total: 0.0,
            total_paid: 0.0,
            tip: 0,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn waiter_id(mut self, waiter_id: Option<i32>) -> Self {
        self.waiter_id = waiter_id;
        self
    }

    pub fn state(mut self, state: BillState) -> Self {
        self.state = state;
        self
    }

    pub fn total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    pub fn total_paid(mut self, total_paid: f64) -> Self {
        self.total_paid = total_paid;
        self
    }

    pub fn tip(mut self, tip: i32) -> Self {
        self.tip = tip;
        self
    }

    pub async fn build(self) -> Result<entity::bill::Model, DbErr> {
        entity::bill::ActiveModel {
            code: ActiveValue::Set(self.code),
            table_id: ActiveValue::Set(self.table_id),
            waiter_id: ActiveValue::Set(self.waiter_id),
            date_time: ActiveValue::Set(Utc::now()),
            state: ActiveValue::Set(self.state),
            total: ActiveValue::Set(self.total),
            total_paid: ActiveValue::Set(self.total_paid),
            tip: ActiveValue::Set(self.tip),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a current bill on the given table with default values.
pub async fn create_bill(
    db: &DatabaseConnection,
    table_id: i32,
) -> Result<entity::bill::Model, DbErr> {
    BillFactory::new(db, table_id).build().await
}
