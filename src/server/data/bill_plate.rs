//! Bill line item repository, including the kitchen queue queries.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BillState;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::bill::{BillPlate, KitchenPlate};

/// Line items per insert statement. Each row binds five values, well below the
/// 32766 parameters SQLite accepts in one statement.
pub const INSERT_CHUNK_ROWS: usize = 1000;

pub struct BillPlateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BillPlateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts `quantity` identical uncooked line items.
    ///
    /// Rows are written in batches of `INSERT_CHUNK_ROWS` so a single statement stays under
    /// SQLite's bind parameter limit. Callers run this inside a transaction when the batches
    /// must land together.
    pub async fn create_many(
        &self,
        bill_id: i32,
        plate_id: i32,
        notes: &str,
        quantity: usize,
    ) -> Result<(), DbErr> {
        let mut remaining = quantity;

        while remaining > 0 {
            let batch = remaining.min(INSERT_CHUNK_ROWS);
            let rows = (0..batch).map(|_| entity::bill_plate::ActiveModel {
                bill_id: ActiveValue::Set(bill_id),
                plate_id: ActiveValue::Set(plate_id),
                notes: ActiveValue::Set(notes.to_string()),
                cooked: ActiveValue::Set(false),
                cooked_at: ActiveValue::Set(None),
                ..Default::default()
            });

            entity::prelude::BillPlate::insert_many(rows)
                .exec_without_returning(self.db)
                .await?;

            remaining -= batch;
        }

        Ok(())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BillPlate>, DbErr> {
        let entity = entity::prelude::BillPlate::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(BillPlate::from_entity))
    }

    /// Uncooked line items on `current` bills, oldest first.
    pub async fn get_pending(&self) -> Result<Vec<KitchenPlate>, DbErr> {
        let rows = entity::prelude::BillPlate::find()
            .join(JoinType::InnerJoin, entity::bill_plate::Relation::Bill.def())
            .filter(entity::bill_plate::Column::Cooked.eq(false))
            .filter(entity::bill::Column::State.eq(BillState::Current))
            .order_by_asc(entity::bill_plate::Column::Id)
            .find_also_related(entity::prelude::Plate)
            .all(self.db)
            .await?;

        let bill_ids: Vec<i32> = rows.iter().map(|(item, _)| item.bill_id).collect();
        let bills: HashMap<i32, entity::bill::Model> = entity::prelude::Bill::find()
            .filter(entity::bill::Column::Id.is_in(bill_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|bill| (bill.id, bill))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(item, plate)| {
                let bill = bills.get(&item.bill_id)?;
                Some(KitchenPlate {
                    id: item.id,
                    bill_id: item.bill_id,
                    bill_code: bill.code.clone(),
                    table_id: bill.table_id,
                    plate_id: item.plate_id,
                    plate_name: plate.map(|p| p.name).unwrap_or_default(),
                    notes: item.notes,
                    cooked: item.cooked,
                    cooked_at: item.cooked_at,
                })
            })
            .collect())
    }

    /// Sets the cooked flag, stamping `cooked_at` when cooked and clearing it otherwise.
    ///
    /// # Returns
    /// - `Ok(Some(BillPlate))` - Updated line item
    /// - `Ok(None)` - No line item with that id
    pub async fn set_cooked(
        &self,
        id: i32,
        cooked: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<BillPlate>, DbErr> {
        let Some(existing) = entity::prelude::BillPlate::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::bill_plate::ActiveModel = existing.into();
        active.cooked = ActiveValue::Set(cooked);
        active.cooked_at = ActiveValue::Set(cooked.then_some(now));
        let entity = active.update(self.db).await?;

        Ok(Some(BillPlate::from_entity(entity)))
    }
}
