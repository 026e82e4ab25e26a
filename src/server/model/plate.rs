//! Menu domain models.

use crate::model::plate::{PlateCategoryDto, PlateDto, SavePlateDto};

#[derive(Debug, Clone, PartialEq)]
pub struct PlateCategory {
    pub id: i32,
    pub label: String,
}

impl PlateCategory {
    pub fn from_entity(entity: entity::plate_category::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
        }
    }

    pub fn into_dto(self) -> PlateCategoryDto {
        PlateCategoryDto {
            id: self.id,
            label: self.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<i32>,
    pub available: bool,
}

impl Plate {
    pub fn from_entity(entity: entity::plate::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            category_id: entity.category_id,
            available: entity.available,
        }
    }

    pub fn into_dto(self) -> PlateDto {
        PlateDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category_id,
            available: self.available,
        }
    }
}

/// Parameters for creating or replacing a plate.
#[derive(Debug, Clone)]
pub struct SavePlateParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<i32>,
    pub available: bool,
}

impl SavePlateParams {
    pub fn from_dto(dto: SavePlateDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            category_id: dto.category,
            available: dto.available,
        }
    }
}
