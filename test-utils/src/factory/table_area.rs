//! Table area factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TableAreaFactory<'a> {
    db: &'a DatabaseConnection,
    label: String,
}

impl<'a> TableAreaFactory<'a> {
    /// Creates a new factory with label `"Area {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            label: format!("Area {}", next_id()),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub async fn build(self) -> Result<entity::table_area::Model, DbErr> {
        entity::table_area::ActiveModel {
            label: ActiveValue::Set(self.label),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a table area with default values.
pub async fn create_area(db: &DatabaseConnection) -> Result<entity::table_area::Model, DbErr> {
    TableAreaFactory::new(db).build().await
}
