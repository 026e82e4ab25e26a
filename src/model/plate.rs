use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PlateCategoryDto {
    pub id: i32,
    pub label: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PlateCategoryListDto {
    pub categories: Vec<PlateCategoryDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SavePlateCategoryDto {
    pub label: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PlateDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<i32>,
    pub available: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PlateListDto {
    pub plates: Vec<PlateDto>,
}

/// Optional filter for the public plate listing.
#[derive(Serialize, Deserialize, IntoParams, Debug, Clone, Default)]
#[into_params(parameter_in = Query)]
pub struct PlateQueryDto {
    pub category: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SavePlateDto {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: Option<i32>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}
