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
        table::{
            CreateTableDto, SaveTableAreaDto, TableAreaDto, TableAreaListDto, TableDto,
            TableListDto, UpdateTableDto,
        },
    },
    server::{
        controller::{
            admin::ADMIN_TAG, catalog::into_area_list_dto, waiter::into_table_list_dto,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::table::{CreateTableParams, UpdateTableParams},
        service::table::TableService,
        state::AppState,
    },
};

/// Create a table area.
#[utoipa::path(
    post,
    path = "/admin/create-table-area",
    tag = ADMIN_TAG,
    request_body = SaveTableAreaDto,
    responses(
        (status = 201, description = "Area created", body = TableAreaDto),
        (status = 400, description = "Missing or duplicate label", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_table_area(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveTableAreaDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let area = TableService::new(&state.db)
        .create_area(payload.label)
        .await?;

    Ok((StatusCode::CREATED, Json(area.into_dto())))
}

/// Rename a table area.
#[utoipa::path(
    post,
    path = "/admin/edit-table-area/{area_id}",
    tag = ADMIN_TAG,
    params(("area_id" = i32, Path, description = "Table area ID")),
    request_body = SaveTableAreaDto,
    responses(
        (status = 200, description = "Area updated", body = TableAreaDto),
        (status = 400, description = "Missing or duplicate label", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Table area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_table_area(
    State(state): State<AppState>,
    session: Session,
    Path(area_id): Path<i32>,
    Json(payload): Json<SaveTableAreaDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let area = TableService::new(&state.db)
        .update_area(area_id, payload.label)
        .await?;

    Ok((StatusCode::OK, Json(area.into_dto())))
}

/// Delete a table area that no table belongs to.
#[utoipa::path(
    delete,
    path = "/admin/delete-table-area/{area_id}",
    tag = ADMIN_TAG,
    params(("area_id" = i32, Path, description = "Table area ID")),
    responses(
        (status = 204, description = "Area deleted"),
        (status = 400, description = "Area still has tables", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Table area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_table_area(
    State(state): State<AppState>,
    session: Session,
    Path(area_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TableService::new(&state.db).delete_area(area_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/get-table-areas",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Table areas", body = TableAreaListDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_areas(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let areas = TableService::new(&state.db).get_areas().await?;

    Ok((StatusCode::OK, Json(into_area_list_dto(areas))))
}

/// Create a table. New tables start `available`.
///
/// # Returns
/// - `201 Created` - Table created
/// - `400 Bad Request` - Missing or duplicate code, capacity below 1, or unknown area
#[utoipa::path(
    post,
    path = "/admin/create-table",
    tag = ADMIN_TAG,
    request_body = CreateTableDto,
    responses(
        (status = 201, description = "Table created", body = TableDto),
        (status = 400, description = "Invalid table data", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_table(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTableDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let table = TableService::new(&state.db)
        .create(CreateTableParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(table.into_dto(None))))
}

/// Update a table.
///
/// The state of a table with a current bill cannot be changed by hand.
#[utoipa::path(
    post,
    path = "/admin/edit-table/{table_id}",
    tag = ADMIN_TAG,
    params(("table_id" = i32, Path, description = "Table ID")),
    request_body = UpdateTableDto,
    responses(
        (status = 200, description = "Table updated", body = TableDto),
        (status = 400, description = "Invalid table data", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_table(
    State(state): State<AppState>,
    session: Session,
    Path(table_id): Path<i32>,
    Json(payload): Json<UpdateTableDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let table = TableService::new(&state.db)
        .update(UpdateTableParams::from_dto(table_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(table.into_dto(None))))
}

/// Delete a table without a current bill.
#[utoipa::path(
    delete,
    path = "/admin/delete-table/{table_id}",
    tag = ADMIN_TAG,
    params(("table_id" = i32, Path, description = "Table ID")),
    responses(
        (status = 204, description = "Table deleted"),
        (status = 400, description = "Table has an active bill", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_table(
    State(state): State<AppState>,
    session: Session,
    Path(table_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    TableService::new(&state.db).delete(table_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/get-tables",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Tables with their active bill code", body = TableListDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tables(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let tables = TableService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_table_list_dto(tables))))
}
