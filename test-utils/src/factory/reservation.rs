//! Reservation factory.
//!
//! Reservations default to `active`, unassigned and scheduled one hour from now.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::ReservationState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations.
///
/// # Example
///
/// ```rust,ignore
/// let reservation = ReservationFactory::new(&db)
///     .state(ReservationState::InCourse)
///     .table_id(Some(table.id))
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    email: Option<String>,
    phone_number: Option<String>,
    date_time: DateTime<Utc>,
    amount_people: i32,
    state: ReservationState,
    table_id: Option<i32>,
    area_id: Option<i32>,
    client_id: Option<i32>,
    notes: Option<String>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - code: `"RES-T{id}"` (zero padded to six characters)
    /// - name: `"Guest {id}"`, email `"guest_{id}@example.com"`
    /// - date_time: one hour from now
    /// - amount_people: `2`
    /// - state: `ReservationState::Active`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("RES-T{:05}", id),
            name: format!("Guest {}", id),
            email: Some(format!("guest_{}@example.com", id)),
            phone_number: None,
            date_time: Utc::now() + Duration::hours(1),
            amount_people: 2,
            state: ReservationState::Active,
            table_id: None,
            area_id: None,
            client_id: None,
            notes: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn phone_number(mut self, phone_number: Option<String>) -> Self {
        self.phone_number = phone_number;
        self
    }

    pub fn date_time(mut self, date_time: DateTime<Utc>) -> Self {
        self.date_time = date_time;
        self
    }

    pub fn amount_people(mut self, amount_people: i32) -> Self {
        self.amount_people = amount_people;
        self
    }

    pub fn state(mut self, state: ReservationState) -> Self {
        self.state = state;
        self
    }

    pub fn table_id(mut self, table_id: Option<i32>) -> Self {
        self.table_id = table_id;
        self
    }

    pub fn area_id(mut self, area_id: Option<i32>) -> Self {
        self.area_id = area_id;
        self
    }

    pub fn client_id(mut self, client_id: Option<i32>) -> Self {
        self.client_id = client_id;
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(self.phone_number),
            date_time: ActiveValue::Set(self.date_time),
            amount_people: ActiveValue::Set(self.amount_people),
            state: ActiveValue::Set(self.state),
            table_id: ActiveValue::Set(self.table_id),
            area_id: ActiveValue::Set(self.area_id),
            client_id: ActiveValue::Set(self.client_id),
            notes: ActiveValue::Set(self.notes),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active reservation with default values.
pub async fn create_reservation(
    db: &DatabaseConnection,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db).build().await
}
