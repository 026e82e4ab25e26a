use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::table::TableArea;

pub struct TableAreaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableAreaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, label: String) -> Result<TableArea, DbErr> {
        let entity = entity::table_area::ActiveModel {
            label: ActiveValue::Set(label),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TableArea::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TableArea>, DbErr> {
        let entity = entity::prelude::TableArea::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TableArea::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TableArea::find()
            .filter(entity::table_area::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<TableArea>, DbErr> {
        let entities = entity::prelude::TableArea::find()
            .order_by_asc(entity::table_area::Column::Label)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TableArea::from_entity).collect())
    }

    /// Renames an area.
    ///
    /// # Returns
    /// - `Ok(Some(TableArea))` - Updated area
    /// - `Ok(None)` - No area with that id
    pub async fn update(&self, id: i32, label: String) -> Result<Option<TableArea>, DbErr> {
        let Some(existing) = entity::prelude::TableArea::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::table_area::ActiveModel = existing.into();
        active.label = ActiveValue::Set(label);
        let entity = active.update(self.db).await?;

        Ok(Some(TableArea::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TableArea::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
