//! Reservation data repository.
//!
//! Holds the state transitions of the reservation lifecycle as single-statement writes so the
//! services can compose them inside one transaction.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ReservationState;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::reservation::{
    EditReservationParams, Reservation, ReservationLookup, ReservationRecord,
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, record: ReservationRecord) -> Result<Reservation, DbErr> {
        let entity = Self::active_model(record).insert(self.db).await?;

        Ok(Reservation::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Most recent reservation matching an email or phone number.
    ///
    /// A `Code` lookup is an exact match and ignores `only_active`.
    ///
    /// # Arguments
    /// - `lookup` - Contact to match
    /// - `only_active` - Restrict to reservations in the `active` state
    pub async fn find_latest(
        &self,
        lookup: &ReservationLookup,
        only_active: bool,
    ) -> Result<Option<Reservation>, DbErr> {
        if let ReservationLookup::Code(code) = lookup {
            return self.find_by_code(code).await;
        }

        let mut query = Self::by_contact(lookup)
            .order_by_desc(entity::reservation::Column::DateTime)
            .order_by_desc(entity::reservation::Column::Id);
        if only_active {
            query = query.filter(entity::reservation::Column::State.eq(ReservationState::Active));
        }

        let entity = query.one(self.db).await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Every reservation matching the contact, most recent first.
    pub async fn get_by_contact(&self, lookup: &ReservationLookup) -> Result<Vec<Reservation>, DbErr> {
        let entities = Self::by_contact(lookup)
            .order_by_desc(entity::reservation::Column::DateTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Active reservations scheduled in `[start, end)`, earliest first.
    pub async fn get_active_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::State.eq(ReservationState::Active))
            .filter(entity::reservation::Column::DateTime.gte(start))
            .filter(entity::reservation::Column::DateTime.lt(end))
            .order_by_asc(entity::reservation::Column::DateTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    pub async fn get_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .order_by_desc(entity::reservation::Column::DateTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Applies a client edit. Any edit drops the table assignment.
    pub async fn apply_edit(
        &self,
        id: i32,
        params: EditReservationParams,
    ) -> Result<Option<Reservation>, DbErr> {
        let Some(existing) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::reservation::ActiveModel = existing.into();
        if let Some(date_time) = params.date_time {
            active.date_time = ActiveValue::Set(date_time);
        }
        if let Some(amount_people) = params.amount_people {
            active.amount_people = ActiveValue::Set(amount_people);
        }
        if let Some(area_id) = params.area_id {
            active.area_id = ActiveValue::Set(area_id);
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        active.table_id = ActiveValue::Set(None);
        let entity = active.update(self.db).await?;

        Ok(Some(Reservation::from_entity(entity)))
    }

    /// Overwrites every column except the code.
    pub async fn replace(&self, id: i32, record: ReservationRecord) -> Result<Option<Reservation>, DbErr> {
        if entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let mut active = Self::active_model(record);
        active.id = ActiveValue::Unchanged(id);
        active.code = ActiveValue::NotSet;
        let entity = active.update(self.db).await?;

        Ok(Some(Reservation::from_entity(entity)))
    }

    /// Moves an `active` reservation to `cancelled`.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation cancelled
    /// - `Ok(false)` - Reservation missing or no longer `active`
    pub async fn cancel_if_active(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::State,
                Expr::value(ReservationState::Cancelled),
            )
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::State.eq(ReservationState::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Seats an `active` reservation at a table, moving it to `in_course`.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation assigned
    /// - `Ok(false)` - Reservation missing or no longer `active`
    pub async fn assign_table_if_active(&self, id: i32, table_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::State,
                Expr::value(ReservationState::InCourse),
            )
            .col_expr(entity::reservation::Column::TableId, Expr::value(table_id))
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::State.eq(ReservationState::Active))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finalizes every `in_course` reservation seated at the table.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reservations finalized
    pub async fn finalize_in_course_for_table(&self, table_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::State,
                Expr::value(ReservationState::Finalized),
            )
            .filter(entity::reservation::Column::TableId.eq(table_id))
            .filter(entity::reservation::Column::State.eq(ReservationState::InCourse))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns every `in_course` reservation seated at the table to `active`, unassigned.
    pub async fn release_in_course_for_table(&self, table_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(
                entity::reservation::Column::State,
                Expr::value(ReservationState::Active),
            )
            .col_expr(
                entity::reservation::Column::TableId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::reservation::Column::TableId.eq(table_id))
            .filter(entity::reservation::Column::State.eq(ReservationState::InCourse))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves the reservations seated at `from` to `to`, keeping them `in_course`.
    pub async fn move_in_course_to_table(&self, from: i32, to: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::update_many()
            .col_expr(entity::reservation::Column::TableId, Expr::value(to))
            .filter(entity::reservation::Column::TableId.eq(from))
            .filter(entity::reservation::Column::State.eq(ReservationState::InCourse))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn by_contact(lookup: &ReservationLookup) -> Select<entity::reservation::Entity> {
        let query = entity::prelude::Reservation::find();
        match lookup {
            ReservationLookup::Code(code) => {
                query.filter(entity::reservation::Column::Code.eq(code.as_str()))
            }
            ReservationLookup::Email(email) => {
                query.filter(entity::reservation::Column::Email.eq(email.as_str()))
            }
            ReservationLookup::PhoneNumber(phone_number) => {
                query.filter(entity::reservation::Column::PhoneNumber.eq(phone_number.as_str()))
            }
        }
    }

    fn active_model(record: ReservationRecord) -> entity::reservation::ActiveModel {
        entity::reservation::ActiveModel {
            code: ActiveValue::Set(record.code),
            name: ActiveValue::Set(record.name),
            email: ActiveValue::Set(record.email),
            phone_number: ActiveValue::Set(record.phone_number),
            date_time: ActiveValue::Set(record.date_time),
            amount_people: ActiveValue::Set(record.amount_people),
            state: ActiveValue::Set(record.state),
            table_id: ActiveValue::Set(record.table_id),
            area_id: ActiveValue::Set(record.area_id),
            client_id: ActiveValue::Set(record.client_id),
            notes: ActiveValue::Set(record.notes),
            ..Default::default()
        }
    }
}
