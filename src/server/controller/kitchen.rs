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
        bill::{BillPlateDto, KitchenPlateListDto, MarkCookedDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bill::KitchenPlate,
        service::kitchen::KitchenService,
        state::AppState,
    },
};

/// Tag for grouping kitchen endpoints in OpenAPI documentation
pub static KITCHEN_TAG: &str = "kitchen";

const KITCHEN_STAFF: &[Permission] = &[Permission::Kitchen, Permission::Admin];

/// Uncooked line items on current bills, oldest bill first.
///
/// # Access Control
/// - `Kitchen` or `Admin`
#[utoipa::path(
    get,
    path = "/kitchen/pending-plates",
    tag = KITCHEN_TAG,
    responses(
        (status = 200, description = "Pending line items", body = KitchenPlateListDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_plates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_any(KITCHEN_STAFF)
        .await?;

    let plates = KitchenService::new(&state.db).get_pending().await?;

    Ok((
        StatusCode::OK,
        Json(KitchenPlateListDto {
            plates: plates.into_iter().map(KitchenPlate::into_dto).collect(),
        }),
    ))
}

/// Mark a line item cooked, or back to pending with `{"cooked": false}`.
///
/// # Returns
/// - `200 OK` - The updated line item
/// - `404 Not Found` - No line item with that id
#[utoipa::path(
    post,
    path = "/kitchen/mark-plate-cooked/{bill_plate_id}",
    tag = KITCHEN_TAG,
    params(("bill_plate_id" = i32, Path, description = "Bill line item ID")),
    request_body = MarkCookedDto,
    responses(
        (status = 200, description = "Line item updated", body = BillPlateDto),
        (status = 401, description = "Not logged in or missing role", body = ErrorDto),
        (status = 404, description = "Bill plate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_plate_cooked(
    State(state): State<AppState>,
    session: Session,
    Path(bill_plate_id): Path<i32>,
    Json(payload): Json<MarkCookedDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require_any(KITCHEN_STAFF)
        .await?;

    let bill_plate = KitchenService::new(&state.db)
        .mark_cooked(bill_plate_id, payload.cooked.unwrap_or(true))
        .await?;

    Ok((StatusCode::OK, Json(bill_plate.into_dto())))
}
