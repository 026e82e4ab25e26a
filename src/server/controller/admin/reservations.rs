use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        reservation::{AdminSaveReservationDto, ReservationDto, ReservationListDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, user::into_list_dto},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::reservation::AdminSaveReservationParams,
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Create a reservation with every field set by hand.
///
/// Unlike public booking, past dates and any state are accepted.
#[utoipa::path(
    post,
    path = "/admin/create-reservation",
    tag = ADMIN_TAG,
    request_body = AdminSaveReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AdminSaveReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reservation = ReservationService::new(&state.db)
        .admin_create(AdminSaveReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Overwrite every field of a reservation except its code.
#[utoipa::path(
    post,
    path = "/admin/edit-reservation/{reservation_id}",
    tag = ADMIN_TAG,
    params(("reservation_id" = i32, Path, description = "Reservation ID")),
    request_body = AdminSaveReservationDto,
    responses(
        (status = 200, description = "Reservation updated", body = ReservationDto),
        (status = 400, description = "Invalid reservation data", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
    Json(payload): Json<AdminSaveReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reservation = ReservationService::new(&state.db)
        .admin_update(reservation_id, AdminSaveReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/admin/delete-reservation/{reservation_id}",
    tag = ADMIN_TAG,
    params(("reservation_id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ReservationService::new(&state.db)
        .delete(reservation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Every reservation, most recent date first.
#[utoipa::path(
    get,
    path = "/admin/get-reservations",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Reservations", body = ReservationListDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reservations = ReservationService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_list_dto(reservations))))
}
