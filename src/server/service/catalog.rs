//! Menu catalog: plate categories and plates.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{plate::PlateRepository, plate_category::PlateCategoryRepository},
    error::{validation::ValidationError, AppError},
    model::plate::{Plate, PlateCategory, SavePlateParams},
};

pub struct CatalogService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_categories(&self) -> Result<Vec<PlateCategory>, AppError> {
        let categories = PlateCategoryRepository::new(self.db).get_all().await?;

        Ok(categories)
    }

    pub async fn create_category(&self, label: String) -> Result<PlateCategory, AppError> {
        let label = validate_category_label(label)?;

        let category = PlateCategoryRepository::new(self.db)
            .create(label)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "A category with this label already exists"))?;

        Ok(category)
    }

    pub async fn update_category(&self, id: i32, label: String) -> Result<PlateCategory, AppError> {
        let label = validate_category_label(label)?;

        PlateCategoryRepository::new(self.db)
            .update(id, label)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "A category with this label already exists"))?
            .ok_or_else(|| AppError::NotFound("Plate category not found".to_string()))
    }

    /// Deletes a category; its plates stay on the menu uncategorized.
    pub async fn delete_category(&self, id: i32) -> Result<(), AppError> {
        if !PlateCategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Plate category not found".to_string()));
        }

        Ok(())
    }

    /// Plates ordered by name, optionally restricted to one category.
    pub async fn get_plates(&self, category_id: Option<i32>) -> Result<Vec<Plate>, AppError> {
        let plates = PlateRepository::new(self.db).get_all(category_id).await?;

        Ok(plates)
    }

    pub async fn create_plate(&self, params: SavePlateParams) -> Result<Plate, AppError> {
        let params = self.validate_plate(params).await?;

        let plate = PlateRepository::new(self.db).create(params).await?;

        Ok(plate)
    }

    pub async fn update_plate(&self, id: i32, params: SavePlateParams) -> Result<Plate, AppError> {
        let params = self.validate_plate(params).await?;

        PlateRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Plate not found".to_string()))
    }

    /// Deletes a plate together with its line items on existing bills.
    pub async fn delete_plate(&self, id: i32) -> Result<(), AppError> {
        if !PlateRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Plate not found".to_string()));
        }

        Ok(())
    }

    async fn validate_plate(&self, params: SavePlateParams) -> Result<SavePlateParams, AppError> {
        let params = SavePlateParams {
            name: params.name.trim().to_string(),
            ..params
        };

        let mut errors = ValidationError::new("Invalid plate data");
        if params.name.is_empty() {
            errors.add("name", "Name is required");
        }
        if !params.price.is_finite() || params.price < 0.0 {
            errors.add("price", "Price must be a non-negative number");
        }
        if let Some(category_id) = params.category_id {
            if !PlateCategoryRepository::new(self.db)
                .exists(category_id)
                .await?
            {
                errors.add("category", "Plate category not found");
            }
        }
        errors.into_result()?;

        Ok(params)
    }
}

fn validate_category_label(label: String) -> Result<String, ValidationError> {
    let label = label.trim().to_string();
    if label.is_empty() {
        return Err(ValidationError::field("label", "Label is required"));
    }

    Ok(label)
}
