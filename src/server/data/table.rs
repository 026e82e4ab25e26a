//! Dining table repository.
//!
//! Besides CRUD, exposes the occupancy writes used by the bill and reservation lifecycles.

use std::collections::HashMap;

use entity::sea_orm_active_enums::{BillState, TableState};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::table::{CreateTableParams, Table, UpdateTableParams};

pub struct TableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new table in the `available` state.
    pub async fn create(&self, params: CreateTableParams) -> Result<Table, DbErr> {
        let entity = entity::dining_table::ActiveModel {
            code: ActiveValue::Set(params.code),
            capacity: ActiveValue::Set(params.capacity),
            state: ActiveValue::Set(TableState::Available),
            area_id: ActiveValue::Set(params.area_id),
            notes: ActiveValue::Set(params.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Table::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Table>, DbErr> {
        let entity = entity::prelude::DiningTable::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Table::from_entity))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Table>, DbErr> {
        let entity = entity::prelude::DiningTable::find()
            .filter(entity::dining_table::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Table::from_entity))
    }

    /// Checks whether `code` is used by a table other than `excluding`.
    pub async fn code_exists(&self, code: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::DiningTable::find()
            .filter(entity::dining_table::Column::Code.eq(code));
        if let Some(id) = excluding {
            query = query.filter(entity::dining_table::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Number of tables placed in the given area.
    pub async fn count_in_area(&self, area_id: i32) -> Result<u64, DbErr> {
        entity::prelude::DiningTable::find()
            .filter(entity::dining_table::Column::AreaId.eq(area_id))
            .count(self.db)
            .await
    }

    /// All tables ordered by code, each paired with the code of its current bill.
    pub async fn get_all_with_active_bill(&self) -> Result<Vec<(Table, Option<String>)>, DbErr> {
        let tables = entity::prelude::DiningTable::find()
            .order_by_asc(entity::dining_table::Column::Code)
            .all(self.db)
            .await?;

        let current: Vec<(Option<i32>, String)> = entity::prelude::Bill::find()
            .select_only()
            .column(entity::bill::Column::TableId)
            .column(entity::bill::Column::Code)
            .filter(entity::bill::Column::State.eq(BillState::Current))
            .filter(entity::bill::Column::TableId.is_not_null())
            .into_tuple()
            .all(self.db)
            .await?;
        let mut codes: HashMap<i32, String> = current
            .into_iter()
            .filter_map(|(table_id, code)| table_id.map(|id| (id, code)))
            .collect();

        Ok(tables
            .into_iter()
            .map(|t| {
                let code = codes.remove(&t.id);
                (Table::from_entity(t), code)
            })
            .collect())
    }

    /// Sets the occupancy state of a table.
    ///
    /// # Returns
    /// - `Ok(true)` - Table updated
    /// - `Ok(false)` - No table with that id
    pub async fn set_state(&self, id: i32, state: TableState) -> Result<bool, DbErr> {
        let result = entity::prelude::DiningTable::update_many()
            .col_expr(
                entity::dining_table::Column::State,
                sea_orm::sea_query::Expr::value(state),
            )
            .filter(entity::dining_table::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies a partial update.
    pub async fn update(&self, params: UpdateTableParams) -> Result<Option<Table>, DbErr> {
        let Some(existing) = entity::prelude::DiningTable::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::dining_table::ActiveModel = existing.into();
        if let Some(code) = params.code {
            active.code = ActiveValue::Set(code);
        }
        if let Some(capacity) = params.capacity {
            active.capacity = ActiveValue::Set(capacity);
        }
        if let Some(state) = params.state {
            active.state = ActiveValue::Set(state);
        }
        if let Some(area_id) = params.area_id {
            active.area_id = ActiveValue::Set(area_id);
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        let entity = active.update(self.db).await?;

        Ok(Some(Table::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::DiningTable::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
