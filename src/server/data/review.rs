//! Review data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{Review, ReviewRecord};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review stamped with `record.created_at` for both timestamps.
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored review with its author
    /// - `Err(DbErr)` - Database error; a unique violation means the account already has a
    ///   review
    pub async fn create(&self, record: ReviewRecord) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            user_id: ActiveValue::Set(record.user_id),
            title: ActiveValue::Set(record.title),
            content: ActiveValue::Set(record.content),
            score: ActiveValue::Set(record.score),
            created_at: ActiveValue::Set(record.created_at),
            updated_at: ActiveValue::Set(record.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let user = entity::prelude::User::find_by_id(entity.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", entity.user_id)))?;

        Ok(Review::from_entity(entity, user))
    }

    pub async fn exists_for_user(&self, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Every review with its author, newest first.
    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        let rows = entity::prelude::Review::find()
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(review, user)| user.map(|user| Review::from_entity(review, user)))
            .collect())
    }
}
