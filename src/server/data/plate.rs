use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::plate::{Plate, SavePlateParams};

pub struct PlateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SavePlateParams) -> Result<Plate, DbErr> {
        let entity = entity::plate::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            category_id: ActiveValue::Set(params.category_id),
            available: ActiveValue::Set(params.available),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Plate::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Plate>, DbErr> {
        let entity = entity::prelude::Plate::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Plate::from_entity))
    }

    /// Plates ordered by name, optionally filtered by category.
    pub async fn get_all(&self, category_id: Option<i32>) -> Result<Vec<Plate>, DbErr> {
        let mut query = entity::prelude::Plate::find().order_by_asc(entity::plate::Column::Name);
        if let Some(category_id) = category_id {
            query = query.filter(entity::plate::Column::CategoryId.eq(category_id));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Plate::from_entity).collect())
    }

    /// Replaces every field of a plate.
    pub async fn update(&self, id: i32, params: SavePlateParams) -> Result<Option<Plate>, DbErr> {
        let Some(existing) = entity::prelude::Plate::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::plate::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.price = ActiveValue::Set(params.price);
        active.category_id = ActiveValue::Set(params.category_id);
        active.available = ActiveValue::Set(params.available);
        let entity = active.update(self.db).await?;

        Ok(Some(Plate::from_entity(entity)))
    }

    /// Deletes a plate. Its line items on existing bills are removed with it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Plate::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
