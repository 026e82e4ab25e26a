//! Bill line item factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BillPlateFactory<'a> {
    db: &'a DatabaseConnection,
    bill_id: i32,
    plate_id: i32,
    notes: String,
    cooked: bool,
}

impl<'a> BillPlateFactory<'a> {
    /// Creates a new factory for an uncooked line item with empty notes.
    pub fn new(db: &'a DatabaseConnection, bill_id: i32, plate_id: i32) -> Self {
        Self {
            db,
            bill_id,
            plate_id,
            notes: String::new(),
            cooked: false,
        }
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Marks the line item cooked; `cooked_at` is set to now.
    pub fn cooked(mut self, cooked: bool) -> Self {
        self.cooked = cooked;
        self
    }

    pub async fn build(self) -> Result<entity::bill_plate::Model, DbErr> {
        entity::bill_plate::ActiveModel {
            bill_id: ActiveValue::Set(self.bill_id),
            plate_id: ActiveValue::Set(self.plate_id),
            notes: ActiveValue::Set(self.notes),
            cooked: ActiveValue::Set(self.cooked),
            cooked_at: ActiveValue::Set(self.cooked.then(chrono::Utc::now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_bill_plate(
    db: &DatabaseConnection,
    bill_id: i32,
    plate_id: i32,
) -> Result<entity::bill_plate::Model, DbErr> {
    BillPlateFactory::new(db, bill_id, plate_id).build().await
}
