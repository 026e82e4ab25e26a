//! Plate factory for creating menu items.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test plates.
///
/// # Example
///
/// ```rust,ignore
/// let plate = PlateFactory::new(&db).price(12.5).build().await?;
/// ```
pub struct PlateFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    price: f64,
    category_id: Option<i32>,
    available: bool,
}

impl<'a> PlateFactory<'a> {
    /// Creates a new PlateFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Plate {id}"`
    /// - price: `10.0`
    /// - no category, available
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Plate {}", next_id()),
            description: None,
            price: 10.0,
            category_id: None,
            available: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub async fn build(self) -> Result<entity::plate::Model, DbErr> {
        entity::plate::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            category_id: ActiveValue::Set(self.category_id),
            available: ActiveValue::Set(self.available),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a plate with default values.
pub async fn create_plate(db: &DatabaseConnection) -> Result<entity::plate::Model, DbErr> {
    PlateFactory::new(db).build().await
}

/// Creates a plate with a specific price.
pub async fn create_plate_with_price(
    db: &DatabaseConnection,
    price: f64,
) -> Result<entity::plate::Model, DbErr> {
    PlateFactory::new(db).price(price).build().await
}
