use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        plate::{PlateCategoryListDto, PlateListDto, PlateQueryDto},
        table::TableAreaListDto,
    },
    server::{
        error::AppError,
        model::{
            plate::{Plate, PlateCategory},
            table::TableArea,
        },
        service::{catalog::CatalogService, table::TableService},
        state::AppState,
    },
};

/// Tag for grouping public catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// List plates, optionally filtered by category.
///
/// # Returns
/// - `200 OK` - Plates ordered by name
#[utoipa::path(
    get,
    path = "/plates",
    tag = CATALOG_TAG,
    params(PlateQueryDto),
    responses(
        (status = 200, description = "Plates", body = PlateListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plates(
    State(state): State<AppState>,
    Query(query): Query<PlateQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let plates = CatalogService::new(&state.db)
        .get_plates(query.category)
        .await?;

    Ok((StatusCode::OK, Json(into_plate_list_dto(plates))))
}

/// List plate categories.
#[utoipa::path(
    get,
    path = "/plate-categories",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Plate categories", body = PlateCategoryListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plate_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = CatalogService::new(&state.db).get_categories().await?;

    Ok((StatusCode::OK, Json(into_category_list_dto(categories))))
}

/// List table areas, so clients can pick a preferred area when booking.
#[utoipa::path(
    get,
    path = "/table-areas",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Table areas", body = TableAreaListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_areas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let areas = TableService::new(&state.db).get_areas().await?;

    Ok((StatusCode::OK, Json(into_area_list_dto(areas))))
}

pub(crate) fn into_plate_list_dto(plates: Vec<Plate>) -> PlateListDto {
    PlateListDto {
        plates: plates.into_iter().map(Plate::into_dto).collect(),
    }
}

pub(crate) fn into_category_list_dto(categories: Vec<PlateCategory>) -> PlateCategoryListDto {
    PlateCategoryListDto {
        categories: categories.into_iter().map(PlateCategory::into_dto).collect(),
    }
}

pub(crate) fn into_area_list_dto(areas: Vec<TableArea>) -> TableAreaListDto {
    TableAreaListDto {
        areas: areas.into_iter().map(TableArea::into_dto).collect(),
    }
}
