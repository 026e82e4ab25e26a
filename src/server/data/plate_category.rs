use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::plate::PlateCategory;

pub struct PlateCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlateCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, label: String) -> Result<PlateCategory, DbErr> {
        let entity = entity::plate_category::ActiveModel {
            label: ActiveValue::Set(label),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PlateCategory::from_entity(entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PlateCategory::find()
            .filter(entity::plate_category::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<PlateCategory>, DbErr> {
        let entities = entity::prelude::PlateCategory::find()
            .order_by_asc(entity::plate_category::Column::Label)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PlateCategory::from_entity).collect())
    }

    pub async fn update(&self, id: i32, label: String) -> Result<Option<PlateCategory>, DbErr> {
        let Some(existing) = entity::prelude::PlateCategory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::plate_category::ActiveModel = existing.into();
        active.label = ActiveValue::Set(label);
        let entity = active.update(self.db).await?;

        Ok(Some(PlateCategory::from_entity(entity)))
    }

    /// Deletes a category. Plates in it keep existing without a category.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlateCategory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
