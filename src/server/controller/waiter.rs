//! Floor staff endpoints under `/waiter`.
//!
//! Waiters only ever see and modify the bills assigned to them. Admins hold every
//! waiter permission and act on all bills.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bill::{AddPlateDto, BillDto, BillListDto, CreateBillDto, FinalizeBillDto},
        reservation::{AssignTableDto, ReservationDto, ReservationListDto},
        table::TableListDto,
    },
    server::{
        controller::user::into_list_dto,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            bill::{AddPlateParams, Bill, CreateBillParams, FinalizeBillParams, WaiterAssignment},
            table::Table,
        },
        service::{bill::BillService, reservation::ReservationService, table::TableService},
        state::AppState,
    },
};

/// Tag for grouping waiter endpoints in OpenAPI documentation
pub static WAITER_TAG: &str = "waiter";

const FLOOR_STAFF: &[Permission] = &[Permission::Waiter, Permission::Admin];

/// Open a bill on a table.
///
/// Without `waiter` in the body the active waiter with the fewest current bills is
/// assigned. The table becomes `occupied`.
///
/// # Access Control
/// - `Waiter` or `Admin`
///
/// # Returns
/// - `201 Created` - Bill opened with a `CUE-` code
/// - `400 Bad Request` - Table or waiter missing, or table already has an active bill
/// - `401 Unauthorized` - Not logged in or missing role
/// - `500 Internal Server Error` - No active waiters to assign
#[utoipa::path(
    post,
    path = "/waiter/create-bill",
    tag = WAITER_TAG,
    request_body = CreateBillDto,
    responses(
        (status = 201, description = "Bill created", body = BillDto),
        (status = 400, description = "Invalid table or waiter", body = ErrorDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bill(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_any(FLOOR_STAFF)
        .await?;

    let bill = BillService::new(&state.db)
        .create(create_bill_params(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(bill.into_dto())))
}

/// Add `quantity` units of a plate to a current bill.
///
/// Each unit becomes its own line item so the kitchen can mark them cooked separately.
///
/// # Returns
/// - `200 OK` - The bill with its new total and line items
/// - `400 Bad Request` - Bill missing or closed, plate missing or unavailable, invalid
///   quantity or notes
#[utoipa::path(
    post,
    path = "/waiter/add-plate-to-bill/{bill_id}",
    tag = WAITER_TAG,
    params(("bill_id" = i32, Path, description = "Bill ID")),
    request_body = AddPlateDto,
    responses(
        (status = 200, description = "Plate added", body = BillDto),
        (status = 400, description = "Invalid bill, plate, quantity or notes", body = ErrorDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_plate_to_bill(
    State(state): State<AppState>,
    session: Session,
    Path(bill_id): Path<i32>,
    Json(payload): Json<AddPlateDto>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &session)
        .require_any(FLOOR_STAFF)
        .await?;

    let params = AddPlateParams {
        bill_id,
        plate_id: payload.plate_id,
        quantity: payload.quantity.unwrap_or(1),
        notes: payload.notes.unwrap_or_default(),
    };

    let bill = BillService::new(&state.db)
        .add_plate(ctx.bill_access(), params)
        .await?;

    Ok((StatusCode::OK, Json(bill.into_dto())))
}

/// Close a bill after payment.
///
/// The payment must cover `total * (1 + tip_percentage / 100)`. Closing frees the table
/// and finalizes the reservations seated at it.
///
/// # Returns
/// - `200 OK` - The closed bill
/// - `400 Bad Request` - Bill missing or closed, invalid tip, or insufficient payment
#[utoipa::path(
    post,
    path = "/waiter/finalize-bill/{bill_id}",
    tag = WAITER_TAG,
    params(("bill_id" = i32, Path, description = "Bill ID")),
    request_body = FinalizeBillDto,
    responses(
        (status = 200, description = "Bill finalized", body = BillDto),
        (status = 400, description = "Invalid bill or payment", body = ErrorDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn finalize_bill(
    State(state): State<AppState>,
    session: Session,
    Path(bill_id): Path<i32>,
    Json(payload): Json<FinalizeBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &session)
        .require_any(FLOOR_STAFF)
        .await?;

    let params = FinalizeBillParams {
        bill_id,
        amount_paid: payload.amount_paid,
        tip_percentage: payload.tip_percentage.unwrap_or(0.0),
    };

    let bill = BillService::new(&state.db)
        .finalize(ctx.bill_access(), params)
        .await?;

    Ok((StatusCode::OK, Json(bill.into_dto())))
}

/// Seat a reservation at a table.
///
/// The reservation must be active and for today, and the table available. A bill is
/// opened on the table for the least-loaded waiter.
///
/// # Returns
/// - `200 OK` - The reservation, now `in_course`
/// - `400 Bad Request` - Reservation or table not eligible
/// - `500 Internal Server Error` - No active waiters to assign
#[utoipa::path(
    post,
    path = "/waiter/assign-table-to-reservation/{reservation_id}",
    tag = WAITER_TAG,
    params(("reservation_id" = i32, Path, description = "Reservation ID")),
    request_body = AssignTableDto,
    responses(
        (status = 200, description = "Table assigned", body = ReservationDto),
        (status = 400, description = "Reservation or table not eligible", body = ErrorDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_table_to_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
    Json(payload): Json<AssignTableDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_any(FLOOR_STAFF)
        .await?;

    let reservation = ReservationService::new(&state.db)
        .assign_table(reservation_id, &payload.table_code, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// List the caller's bills, newest first.
#[utoipa::path(
    get,
    path = "/waiter/bills",
    tag = WAITER_TAG,
    responses(
        (status = 200, description = "Bills assigned to the caller", body = BillListDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &session)
        .require_any(FLOOR_STAFF)
        .await?;

    let bills = BillService::new(&state.db)
        .get_visible(ctx.bill_access())
        .await?;

    Ok((StatusCode::OK, Json(into_bill_list_dto(bills))))
}

/// Get one of the caller's bills.
#[utoipa::path(
    get,
    path = "/waiter/bills/{bill_id}",
    tag = WAITER_TAG,
    params(("bill_id" = i32, Path, description = "Bill ID")),
    responses(
        (status = 200, description = "Bill with line items", body = BillDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bill(
    State(state): State<AppState>,
    session: Session,
    Path(bill_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &session)
        .require_any(FLOOR_STAFF)
        .await?;

    let Some(bill) = BillService::new(&state.db)
        .get_one(ctx.bill_access(), bill_id)
        .await?
    else {
        return Err(AppError::NotFound("Bill not found".to_string()));
    };

    Ok((StatusCode::OK, Json(bill.into_dto())))
}

/// Today's active reservations, earliest first.
///
/// # Access Control
/// - `Waiter`, `Kitchen` or `Admin`
#[utoipa::path(
    get,
    path = "/waiter/reservations",
    tag = WAITER_TAG,
    responses(
        (status = 200, description = "Today's active reservations", body = ReservationListDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_any(&[Permission::Waiter, Permission::Kitchen, Permission::Admin])
        .await?;

    let reservations = ReservationService::new(&state.db)
        .get_today(Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(into_list_dto(reservations))))
}

/// All tables with the code of their active bill, if any.
#[utoipa::path(
    get,
    path = "/waiter/tables",
    tag = WAITER_TAG,
    responses(
        (status = 200, description = "Tables", body = TableListDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tables(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_any(FLOOR_STAFF)
        .await?;

    let tables = TableService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_table_list_dto(tables))))
}

pub(crate) fn create_bill_params(dto: CreateBillDto) -> CreateBillParams {
    CreateBillParams {
        table_id: dto.table,
        waiter: match dto.waiter {
            Some(waiter_id) => WaiterAssignment::Explicit(waiter_id),
            None => WaiterAssignment::LeastLoaded,
        },
    }
}

pub(crate) fn into_bill_list_dto(bills: Vec<Bill>) -> BillListDto {
    BillListDto {
        bills: bills.into_iter().map(Bill::into_dto).collect(),
    }
}

pub(crate) fn into_table_list_dto(tables: Vec<(Table, Option<String>)>) -> TableListDto {
    TableListDto {
        tables: tables
            .into_iter()
            .map(|(table, active_bill_code)| table.into_dto(active_bill_code))
            .collect(),
    }
}
