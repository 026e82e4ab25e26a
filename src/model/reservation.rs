use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStateDto {
    Active,
    InCourse,
    Finalized,
    Cancelled,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReservationDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_time: DateTime<Utc>,
    pub amount_people: i32,
    pub state: ReservationStateDto,
    pub table: Option<i32>,
    pub area: Option<i32>,
    pub client: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReservationListDto {
    pub reservations: Vec<ReservationDto>,
}

/// Reservation request from the public booking form.
///
/// When the caller is logged in, the contact fields are taken from their account and the
/// values sent here are ignored.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateReservationDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_time: DateTime<Utc>,
    pub amount_people: i32,
    /// Preferred table area. Only a preference; no table is assigned at creation.
    pub area: Option<i32>,
    pub notes: Option<String>,
}

/// Identifies a reservation on the public endpoints.
///
/// `code` wins over `email`, which wins over `phone_number`.
#[derive(Serialize, Deserialize, ToSchema, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct ReservationLookupDto {
    pub code: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct EditReservationDto {
    #[serde(flatten)]
    pub lookup: ReservationLookupDto,
    pub date_time: Option<DateTime<Utc>>,
    pub amount_people: Option<i32>,
    #[serde(default, deserialize_with = "crate::model::api::deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub area: Option<Option<i32>>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AssignTableDto {
    pub table_code: String,
}

/// Reservation written by an admin. Every field is settable, including state and table.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AdminSaveReservationDto {
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub date_time: DateTime<Utc>,
    pub amount_people: i32,
    pub state: Option<ReservationStateDto>,
    pub table: Option<i32>,
    pub area: Option<i32>,
    pub client: Option<i32>,
    pub notes: Option<String>,
}
