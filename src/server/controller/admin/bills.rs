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
        bill::{BillDto, BillListDto, CreateBillDto, EditBillDto},
    },
    server::{
        controller::{
            admin::ADMIN_TAG,
            waiter::{create_bill_params, into_bill_list_dto},
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bill::{BillAccess, UpdateBillParams},
        service::bill::BillService,
        state::AppState,
    },
};

/// Open a bill on a table for a chosen or the least-loaded waiter.
#[utoipa::path(
    post,
    path = "/admin/create-bill",
    tag = ADMIN_TAG,
    request_body = CreateBillDto,
    responses(
        (status = 201, description = "Bill created", body = BillDto),
        (status = 400, description = "Invalid table or waiter", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bill(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bill = BillService::new(&state.db)
        .create(create_bill_params(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(bill.into_dto())))
}

/// Every bill, newest first.
#[utoipa::path(
    get,
    path = "/admin/get-bills",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Bills", body = BillListDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bills = BillService::new(&state.db)
        .get_visible(BillAccess::All)
        .await?;

    Ok((StatusCode::OK, Json(into_bill_list_dto(bills))))
}

/// Reassign a bill's table or waiter, or change its state.
///
/// Closing a bill here frees its table and finalizes the reservations seated there. Moving a
/// current bill carries its seated reservations to the new table.
#[utoipa::path(
    post,
    path = "/admin/edit-bill/{bill_id}",
    tag = ADMIN_TAG,
    params(("bill_id" = i32, Path, description = "Bill ID")),
    request_body = EditBillDto,
    responses(
        (status = 200, description = "Bill updated", body = BillDto),
        (status = 400, description = "Invalid table or waiter, or table already has an active bill", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_bill(
    State(state): State<AppState>,
    session: Session,
    Path(bill_id): Path<i32>,
    Json(payload): Json<EditBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let bill = BillService::new(&state.db)
        .update(UpdateBillParams::from_dto(bill_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(bill.into_dto())))
}

/// Delete a bill and its line items.
///
/// Deleting a current bill frees its table and returns the reservations seated there to
/// `active`.
#[utoipa::path(
    delete,
    path = "/admin/delete-bill/{bill_id}",
    tag = ADMIN_TAG,
    params(("bill_id" = i32, Path, description = "Bill ID")),
    responses(
        (status = 204, description = "Bill deleted"),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bill(
    State(state): State<AppState>,
    session: Session,
    Path(bill_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    BillService::new(&state.db).delete(bill_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
