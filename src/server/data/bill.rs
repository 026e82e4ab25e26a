//! Bill data repository.
//!
//! Totals are changed with guarded single-statement updates (`WHERE state = 'current'`) so a
//! line item can never be accrued onto a bill that was closed concurrently.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::BillState;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::bill::{Bill, UpdateBillParams};

pub struct BillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BillRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new `current` bill with zero totals.
    ///
    /// # Returns
    /// - `Ok(Bill)` - The created bill, without line items
    /// - `Err(DbErr)` - Database error; a unique violation means the table already has a
    ///   current bill or the code is taken
    pub async fn create(
        &self,
        code: String,
        table_id: i32,
        waiter_id: Option<i32>,
    ) -> Result<Bill, DbErr> {
        let entity = entity::bill::ActiveModel {
            code: ActiveValue::Set(code),
            table_id: ActiveValue::Set(Some(table_id)),
            waiter_id: ActiveValue::Set(waiter_id),
            date_time: ActiveValue::Set(Utc::now()),
            state: ActiveValue::Set(BillState::Current),
            total: ActiveValue::Set(0.0),
            total_paid: ActiveValue::Set(0.0),
            tip: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bill::from_entity(entity, Vec::new()))
    }

    /// Finds a bill by id with its line items.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bill>, DbErr> {
        self.load_one(entity::prelude::Bill::find_by_id(id)).await
    }

    /// Finds a bill by id, restricted to one waiter's bills.
    pub async fn find_by_id_for_waiter(&self, id: i32, waiter_id: i32) -> Result<Option<Bill>, DbErr> {
        self.load_one(
            entity::prelude::Bill::find_by_id(id)
                .filter(entity::bill::Column::WaiterId.eq(waiter_id)),
        )
        .await
    }

    /// The table's `current` bill, if any.
    pub async fn find_current_for_table(&self, table_id: i32) -> Result<Option<Bill>, DbErr> {
        self.load_one(
            entity::prelude::Bill::find()
                .filter(entity::bill::Column::TableId.eq(table_id))
                .filter(entity::bill::Column::State.eq(BillState::Current)),
        )
        .await
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Bill::find()
            .filter(entity::bill::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Number of `current` bills per waiter. Waiters without any are absent from the map.
    pub async fn current_counts_by_waiter(&self) -> Result<HashMap<i32, i64>, DbErr> {
        let rows: Vec<(Option<i32>, i64)> = entity::prelude::Bill::find()
            .select_only()
            .column(entity::bill::Column::WaiterId)
            .column_as(Func::count(Expr::col(entity::bill::Column::Id)), "count")
            .filter(entity::bill::Column::State.eq(BillState::Current))
            .filter(entity::bill::Column::WaiterId.is_not_null())
            .group_by(entity::bill::Column::WaiterId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(waiter_id, count)| waiter_id.map(|id| (id, count)))
            .collect())
    }

    /// Adds `amount` to the total of a `current` bill.
    ///
    /// # Returns
    /// - `Ok(true)` - Total incremented
    /// - `Ok(false)` - Bill missing or no longer `current`
    pub async fn add_to_total_if_current(&self, id: i32, amount: f64) -> Result<bool, DbErr> {
        let result = entity::prelude::Bill::update_many()
            .col_expr(
                entity::bill::Column::Total,
                Expr::col(entity::bill::Column::Total).add(amount),
            )
            .filter(entity::bill::Column::Id.eq(id))
            .filter(entity::bill::Column::State.eq(BillState::Current))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Closes a `current` bill, recording payment and tip percentage.
    ///
    /// # Returns
    /// - `Ok(true)` - Bill closed
    /// - `Ok(false)` - Bill missing or already closed
    pub async fn close_if_current(&self, id: i32, total_paid: f64, tip: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Bill::update_many()
            .col_expr(entity::bill::Column::State, Expr::value(BillState::Closed))
            .col_expr(entity::bill::Column::TotalPaid, Expr::value(total_paid))
            .col_expr(entity::bill::Column::Tip, Expr::value(tip))
            .filter(entity::bill::Column::Id.eq(id))
            .filter(entity::bill::Column::State.eq(BillState::Current))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Bills served by one waiter, newest first.
    pub async fn get_by_waiter(&self, waiter_id: i32) -> Result<Vec<Bill>, DbErr> {
        self.load_many(
            entity::prelude::Bill::find().filter(entity::bill::Column::WaiterId.eq(waiter_id)),
        )
        .await
    }

    /// Every bill, newest first.
    pub async fn get_all(&self) -> Result<Vec<Bill>, DbErr> {
        self.load_many(entity::prelude::Bill::find()).await
    }

    /// Overwrites the table, waiter and state fields that are set in `params`.
    ///
    /// # Returns
    /// - `Ok(Some(Bill))` - The updated bill with its line items
    /// - `Ok(None)` - No bill with that id
    /// - `Err(DbErr)` - Database error; a unique violation means the target table already
    ///   has a current bill
    pub async fn update(&self, params: UpdateBillParams) -> Result<Option<Bill>, DbErr> {
        let Some(existing) = entity::prelude::Bill::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::bill::ActiveModel = existing.into();
        if let Some(table_id) = params.table_id {
            active.table_id = ActiveValue::Set(Some(table_id));
        }
        if let Some(waiter_id) = params.waiter_id {
            active.waiter_id = ActiveValue::Set(Some(waiter_id));
        }
        if let Some(state) = params.state {
            active.state = ActiveValue::Set(state);
        }
        if active.is_changed() {
            active.update(self.db).await?;
        }

        self.find_by_id(params.id).await
    }

    /// Hard-deletes a bill; its line items cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Bill::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn load_one(&self, query: Select<entity::bill::Entity>) -> Result<Option<Bill>, DbErr> {
        let Some(bill) = query.one(self.db).await? else {
            return Ok(None);
        };

        let plates = entity::prelude::BillPlate::find()
            .filter(entity::bill_plate::Column::BillId.eq(bill.id))
            .order_by_asc(entity::bill_plate::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Bill::from_entity(bill, plates)))
    }

    async fn load_many(&self, query: Select<entity::bill::Entity>) -> Result<Vec<Bill>, DbErr> {
        let bills = query
            .order_by_desc(entity::bill::Column::DateTime)
            .order_by_desc(entity::bill::Column::Id)
            .find_with_related(entity::prelude::BillPlate)
            .all(self.db)
            .await?;

        Ok(bills
            .into_iter()
            .map(|(bill, plates)| Bill::from_entity(bill, plates))
            .collect())
    }
}
