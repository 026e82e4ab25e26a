//! Reservation domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ReservationState;

use crate::{
    model::reservation::{
        AdminSaveReservationDto, CreateReservationDto, EditReservationDto, ReservationDto,
        ReservationLookupDto, ReservationStateDto,
    },
    server::{error::AppError, util::validate::non_blank},
};

pub fn reservation_state_into_dto(state: ReservationState) -> ReservationStateDto {
    match state {
        ReservationState::Active => ReservationStateDto::Active,
        ReservationState::InCourse => ReservationStateDto::InCourse,
        ReservationState::Finalized => ReservationStateDto::Finalized,
        ReservationState::Cancelled => ReservationStateDto::Cancelled,
    }
}

pub fn reservation_state_from_dto(state: ReservationStateDto) -> ReservationState {
    match state {
        ReservationStateDto::Active => ReservationState::Active,
        ReservationStateDto::InCourse => ReservationState::InCourse,
        ReservationStateDto::Finalized => ReservationState::Finalized,
        ReservationStateDto::Cancelled => ReservationState::Cancelled,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_time: DateTime<Utc>,
    pub amount_people: i32,
    pub state: ReservationState,
    pub table_id: Option<i32>,
    pub area_id: Option<i32>,
    pub client_id: Option<i32>,
    pub notes: Option<String>,
}

impl Reservation {
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            email: entity.email,
            phone_number: entity.phone_number,
            date_time: entity.date_time,
            amount_people: entity.amount_people,
            state: entity.state,
            table_id: entity.table_id,
            area_id: entity.area_id,
            client_id: entity.client_id,
            notes: entity.notes,
        }
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            code: self.code,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            date_time: self.date_time,
            amount_people: self.amount_people,
            state: reservation_state_into_dto(self.state),
            table: self.table_id,
            area: self.area_id,
            client: self.client_id,
            notes: self.notes,
        }
    }
}

/// Contact data of the account making a reservation while logged in.
#[derive(Debug, Clone)]
pub struct ReservationClient {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_time: DateTime<Utc>,
    pub amount_people: i32,
    pub area_id: Option<i32>,
    pub notes: Option<String>,
    /// Set when the request comes from a logged-in account; overrides the contact fields.
    pub client: Option<ReservationClient>,
}

impl CreateReservationParams {
    pub fn from_dto(dto: CreateReservationDto, client: Option<ReservationClient>) -> Self {
        Self {
            name: non_blank(dto.name),
            email: non_blank(dto.email),
            phone_number: non_blank(dto.phone_number),
            date_time: dto.date_time,
            amount_people: dto.amount_people,
            area_id: dto.area,
            notes: dto.notes,
            client,
        }
    }
}

/// How a public caller identifies their reservation.
#[derive(Debug, Clone, PartialEq)]
pub enum ReservationLookup {
    Code(String),
    Email(String),
    PhoneNumber(String),
}

impl ReservationLookup {
    /// Picks the lookup key by priority: code, then email, then phone number.
    pub fn from_dto(dto: ReservationLookupDto) -> Result<Self, AppError> {
        if let Some(code) = non_blank(dto.code) {
            return Ok(Self::Code(code));
        }
        if let Some(email) = non_blank(dto.email) {
            return Ok(Self::Email(email));
        }
        if let Some(phone_number) = non_blank(dto.phone_number) {
            return Ok(Self::PhoneNumber(phone_number));
        }

        Err(AppError::BadRequest(
            "Either code, email, or phone number is required".to_string(),
        ))
    }
}

/// Fields a client may change on an active reservation.
#[derive(Debug, Clone, Default)]
pub struct EditReservationParams {
    pub date_time: Option<DateTime<Utc>>,
    pub amount_people: Option<i32>,
    pub area_id: Option<Option<i32>>,
    pub notes: Option<String>,
}

impl EditReservationParams {
    pub fn from_dto(dto: EditReservationDto) -> (ReservationLookupDto, Self) {
        (
            dto.lookup,
            Self {
                date_time: dto.date_time,
                amount_people: dto.amount_people,
                area_id: dto.area,
                notes: dto.notes,
            },
        )
    }

    pub fn is_empty(&self) -> bool {
        self.date_time.is_none()
            && self.amount_people.is_none()
            && self.area_id.is_none()
            && self.notes.is_none()
    }
}

/// Full reservation record as written by an admin.
#[derive(Debug, Clone)]
pub struct AdminSaveReservationParams {
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_time: DateTime<Utc>,
    pub amount_people: i32,
    pub state: Option<ReservationState>,
    pub table_id: Option<i32>,
    pub area_id: Option<i32>,
    pub client_id: Option<i32>,
    pub notes: Option<String>,
}

impl AdminSaveReservationParams {
    pub fn from_dto(dto: AdminSaveReservationDto) -> Self {
        Self {
            name: dto.name,
            email: non_blank(dto.email),
            phone_number: non_blank(dto.phone_number),
            date_time: dto.date_time,
            amount_people: dto.amount_people,
            state: dto.state.map(reservation_state_from_dto),
            table_id: dto.table,
            area_id: dto.area,
            client_id: dto.client,
            notes: dto.notes,
        }
    }
}

/// Row values for a reservation insert or full update at the repository boundary.
#[derive(Debug, Clone)]
pub struct ReservationRecord {
    pub code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_time: DateTime<Utc>,
    pub amount_people: i32,
    pub state: ReservationState,
    pub table_id: Option<i32>,
    pub area_id: Option<i32>,
    pub client_id: Option<i32>,
    pub notes: Option<String>,
}
