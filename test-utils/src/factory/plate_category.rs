//! Plate category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PlateCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    label: String,
}

impl<'a> PlateCategoryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            label: format!("Category {}", next_id()),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub async fn build(self) -> Result<entity::plate_category::Model, DbErr> {
        entity::plate_category::ActiveModel {
            label: ActiveValue::Set(self.label),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::plate_category::Model, DbErr> {
    PlateCategoryFactory::new(db).build().await
}
