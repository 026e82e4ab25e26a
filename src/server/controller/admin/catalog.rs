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
        plate::{
            PlateCategoryDto, PlateCategoryListDto, PlateDto, PlateListDto, SavePlateCategoryDto,
            SavePlateDto,
        },
    },
    server::{
        controller::{
            admin::ADMIN_TAG,
            catalog::{into_category_list_dto, into_plate_list_dto},
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::plate::SavePlateParams,
        service::catalog::CatalogService,
        state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/admin/create-plate-category",
    tag = ADMIN_TAG,
    request_body = SavePlateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = PlateCategoryDto),
        (status = 400, description = "Missing or duplicate label", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plate_category(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SavePlateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category = CatalogService::new(&state.db)
        .create_category(payload.label)
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

#[utoipa::path(
    post,
    path = "/admin/edit-plate-category/{category_id}",
    tag = ADMIN_TAG,
    params(("category_id" = i32, Path, description = "Plate category ID")),
    request_body = SavePlateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = PlateCategoryDto),
        (status = 400, description = "Missing or duplicate label", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plate category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_plate_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
    Json(payload): Json<SavePlateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let category = CatalogService::new(&state.db)
        .update_category(category_id, payload.label)
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

/// Delete a plate category. Plates in it keep existing without a category.
#[utoipa::path(
    delete,
    path = "/admin/delete-plate-category/{category_id}",
    tag = ADMIN_TAG,
    params(("category_id" = i32, Path, description = "Plate category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plate category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plate_category(
    State(state): State<AppState>,
    session: Session,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CatalogService::new(&state.db)
        .delete_category(category_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/get-plate-categories",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Plate categories", body = PlateCategoryListDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plate_categories(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let categories = CatalogService::new(&state.db).get_categories().await?;

    Ok((StatusCode::OK, Json(into_category_list_dto(categories))))
}

/// Add a plate to the menu.
///
/// # Returns
/// - `201 Created` - Plate created
/// - `400 Bad Request` - Missing name, negative price or unknown category
#[utoipa::path(
    post,
    path = "/admin/create-plate",
    tag = ADMIN_TAG,
    request_body = SavePlateDto,
    responses(
        (status = 201, description = "Plate created", body = PlateDto),
        (status = 400, description = "Invalid plate data", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plate(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SavePlateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plate = CatalogService::new(&state.db)
        .create_plate(SavePlateParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(plate.into_dto())))
}

/// Replace a plate. Price changes do not affect bills already holding the plate.
#[utoipa::path(
    post,
    path = "/admin/edit-plate/{plate_id}",
    tag = ADMIN_TAG,
    params(("plate_id" = i32, Path, description = "Plate ID")),
    request_body = SavePlateDto,
    responses(
        (status = 200, description = "Plate updated", body = PlateDto),
        (status = 400, description = "Invalid plate data", body = ErrorDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_plate(
    State(state): State<AppState>,
    session: Session,
    Path(plate_id): Path<i32>,
    Json(payload): Json<SavePlateDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plate = CatalogService::new(&state.db)
        .update_plate(plate_id, SavePlateParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(plate.into_dto())))
}

/// Delete a plate together with its line items on existing bills.
#[utoipa::path(
    delete,
    path = "/admin/delete-plate/{plate_id}",
    tag = ADMIN_TAG,
    params(("plate_id" = i32, Path, description = "Plate ID")),
    responses(
        (status = 204, description = "Plate deleted"),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Plate not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plate(
    State(state): State<AppState>,
    session: Session,
    Path(plate_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    CatalogService::new(&state.db).delete_plate(plate_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/get-plates",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Every plate, available or not", body = PlateListDto),
        (status = 401, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let plates = CatalogService::new(&state.db).get_plates(None).await?;

    Ok((StatusCode::OK, Json(into_plate_list_dto(plates))))
}
