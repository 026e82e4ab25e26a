//! Public reservation endpoints under `/user`.
//!
//! Anonymous callers identify their reservation by code, email or phone number. A
//! logged-in caller books with their account's contact data.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{
            CreateReservationDto, EditReservationDto, ReservationDto, ReservationListDto,
            ReservationLookupDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::reservation::{
            CreateReservationParams, EditReservationParams, Reservation, ReservationClient,
            ReservationLookup,
        },
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Tag for grouping public reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Book a reservation.
///
/// Anonymous callers must provide a name. Logged-in callers book with their account's
/// name, email and phone number.
///
/// # Returns
/// - `201 Created` - Reservation booked with a `RES-` code
/// - `400 Bad Request` - Invalid reservation data
#[utoipa::path(
    post,
    path = "/user/create-reservation",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let client = AuthGuard::new(&state.db, &session)
        .current()
        .await?
        .map(|ctx| ReservationClient {
            id: ctx.user.id,
            name: ctx.user.name,
            email: ctx.user.email,
            phone_number: ctx.user.phone_number,
        });

    let reservation = ReservationService::new(&state.db)
        .create(CreateReservationParams::from_dto(payload, client), Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Look up one reservation.
///
/// A code matches exactly. An email or phone number returns the most recent active
/// reservation, or the most recent one in any state when none is active.
#[utoipa::path(
    get,
    path = "/user/get-reservation",
    tag = RESERVATION_TAG,
    params(ReservationLookupDto),
    responses(
        (status = 200, description = "Matching reservation", body = ReservationDto),
        (status = 400, description = "No lookup key given", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Query(query): Query<ReservationLookupDto>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = ReservationLookup::from_dto(query)?;

    let reservation = ReservationService::new(&state.db).lookup(&lookup).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// List reservations for a contact.
///
/// Logged-in callers get the reservations booked with their account's email. Otherwise
/// an email or phone number query parameter is required.
#[utoipa::path(
    get,
    path = "/user/get-reservations",
    tag = RESERVATION_TAG,
    params(ReservationLookupDto),
    responses(
        (status = 200, description = "Reservations, most recent first", body = ReservationListDto),
        (status = 400, description = "Neither logged in nor a contact given", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReservationLookupDto>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = match AuthGuard::new(&state.db, &session).current().await? {
        Some(ctx) => ReservationLookup::Email(ctx.user.email),
        None => ReservationLookup::from_dto(ReservationLookupDto {
            code: None,
            ..query
        })
        .map_err(|_| {
            AppError::BadRequest(
                "Authentication required, or email/phone_number parameter needed".to_string(),
            )
        })?,
    };

    let reservations = ReservationService::new(&state.db)
        .list_by_contact(&lookup)
        .await?;

    Ok((StatusCode::OK, Json(into_list_dto(reservations))))
}

/// Change the date, party size, preferred area or notes of an active reservation.
///
/// Any change clears a previously assigned table.
#[utoipa::path(
    post,
    path = "/user/edit-reservation",
    tag = RESERVATION_TAG,
    request_body = EditReservationDto,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Invalid data or reservation not active", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_reservation(
    State(state): State<AppState>,
    Json(payload): Json<EditReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let (lookup, params) = EditReservationParams::from_dto(payload);
    let lookup = ReservationLookup::from_dto(lookup)?;

    let reservation = ReservationService::new(&state.db)
        .edit(&lookup, params, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Cancel an active reservation.
#[utoipa::path(
    post,
    path = "/user/cancel-reservation",
    tag = RESERVATION_TAG,
    request_body = ReservationLookupDto,
    responses(
        (status = 200, description = "Reservation cancelled", body = ReservationDto),
        (status = 400, description = "Reservation already cancelled, seated or finalized", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Json(payload): Json<ReservationLookupDto>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = ReservationLookup::from_dto(payload)?;

    let reservation = ReservationService::new(&state.db).cancel(&lookup).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

pub(crate) fn into_list_dto(reservations: Vec<Reservation>) -> ReservationListDto {
    ReservationListDto {
        reservations: reservations.into_iter().map(Reservation::into_dto).collect(),
    }
}
