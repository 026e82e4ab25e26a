//! Kitchen queue: uncooked line items on open bills.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::bill_plate::BillPlateRepository,
    error::AppError,
    model::bill::{BillPlate, KitchenPlate},
};

pub struct KitchenService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> KitchenService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Uncooked line items on `current` bills, oldest order first.
    pub async fn get_pending(&self) -> Result<Vec<KitchenPlate>, AppError> {
        let plates = BillPlateRepository::new(self.db).get_pending().await?;

        Ok(plates)
    }

    /// Marks a line item cooked or uncooked.
    ///
    /// `cooked_at` is stamped with the current time when cooked and cleared otherwise.
    ///
    /// # Returns
    /// - `Ok(BillPlate)` - Updated line item
    /// - `Err(AppError::NotFound)` - No line item with that id
    pub async fn mark_cooked(&self, bill_plate_id: i32, cooked: bool) -> Result<BillPlate, AppError> {
        let plate = BillPlateRepository::new(self.db)
            .set_cooked(bill_plate_id, cooked, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Bill plate not found".to_string()))?;

        tracing::debug!(
            "Line item {} on bill {} marked cooked={}",
            plate.id,
            plate.bill_id,
            plate.cooked
        );

        Ok(plate)
    }
}
