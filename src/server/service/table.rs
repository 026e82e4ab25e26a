//! Dining tables and table areas.
//!
//! Occupancy is normally driven by the bill and reservation lifecycles. The admin update
//! path may only change a table's state while no bill is current on it, so the two can
//! never disagree.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{bill::BillRepository, table::TableRepository, table_area::TableAreaRepository},
    error::{validation::ValidationError, AppError},
    model::table::{CreateTableParams, Table, TableArea, UpdateTableParams},
};

pub struct TableService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TableService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_areas(&self) -> Result<Vec<TableArea>, AppError> {
        let areas = TableAreaRepository::new(self.db).get_all().await?;

        Ok(areas)
    }

    pub async fn create_area(&self, label: String) -> Result<TableArea, AppError> {
        let label = validate_label(label)?;

        let area = TableAreaRepository::new(self.db)
            .create(label)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "A table area with this label already exists"))?;

        Ok(area)
    }

    pub async fn update_area(&self, id: i32, label: String) -> Result<TableArea, AppError> {
        let label = validate_label(label)?;

        TableAreaRepository::new(self.db)
            .update(id, label)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "A table area with this label already exists"))?
            .ok_or_else(|| AppError::NotFound("Table area not found".to_string()))
    }

    /// Deletes an area that no table is placed in.
    ///
    /// # Returns
    /// - `Ok(())` - Area deleted
    /// - `Err(AppError::NotFound)` - No area with that id
    /// - `Err(AppError::Conflict)` - Tables still reference the area
    pub async fn delete_area(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let in_use = TableRepository::new(&txn).count_in_area(id).await?;
        if in_use > 0 {
            return Err(AppError::Conflict(format!(
                "Table area is in use by {in_use} table(s)"
            )));
        }

        if !TableAreaRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound("Table area not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }

    /// All tables, each with the code of its current bill.
    pub async fn get_all(&self) -> Result<Vec<(Table, Option<String>)>, AppError> {
        let tables = TableRepository::new(self.db)
            .get_all_with_active_bill()
            .await?;

        Ok(tables)
    }

    /// Creates a table in the `available` state.
    ///
    /// # Returns
    /// - `Ok(Table)` - Created table
    /// - `Err(AppError::Validation)` - Blank or duplicate code, non-positive capacity or
    ///   unknown area
    pub async fn create(&self, params: CreateTableParams) -> Result<Table, AppError> {
        let table_repo = TableRepository::new(self.db);
        let params = CreateTableParams {
            code: params.code.trim().to_string(),
            ..params
        };

        let mut errors = ValidationError::new("Invalid table data");
        if params.code.is_empty() {
            errors.add("code", "Code is required");
        } else if table_repo.code_exists(&params.code, None).await? {
            errors.add("code", "A table with this code already exists");
        }
        if params.capacity <= 0 {
            errors.add("capacity", "Capacity must be greater than 0");
        }
        if let Some(area_id) = params.area_id {
            if !TableAreaRepository::new(self.db).exists(area_id).await? {
                errors.add("area", "Table area not found");
            }
        }
        errors.into_result()?;

        let table = table_repo
            .create(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "A table with this code already exists"))?;

        Ok(table)
    }

    /// Applies a partial update.
    ///
    /// Changing `state` is refused while the table has a current bill.
    pub async fn update(&self, params: UpdateTableParams) -> Result<Table, AppError> {
        let txn = self.db.begin().await?;
        let table_repo = TableRepository::new(&txn);

        let Some(table) = table_repo.find_by_id(params.id).await? else {
            return Err(AppError::NotFound("Table not found".to_string()));
        };

        let params = UpdateTableParams {
            code: params.code.map(|c| c.trim().to_string()),
            ..params
        };

        let mut errors = ValidationError::new("Invalid table data");
        if let Some(code) = &params.code {
            if code.is_empty() {
                errors.add("code", "Code is required");
            } else if table_repo.code_exists(code, Some(params.id)).await? {
                errors.add("code", "A table with this code already exists");
            }
        }
        if let Some(capacity) = params.capacity {
            if capacity <= 0 {
                errors.add("capacity", "Capacity must be greater than 0");
            }
        }
        if let Some(Some(area_id)) = params.area_id {
            if !TableAreaRepository::new(&txn).exists(area_id).await? {
                errors.add("area", "Table area not found");
            }
        }
        if let Some(state) = &params.state {
            if *state != table.state
                && BillRepository::new(&txn)
                    .find_current_for_table(table.id)
                    .await?
                    .is_some()
            {
                errors.add("state", "Cannot change the state of a table with an active bill");
            }
        }
        errors.into_result()?;

        let updated = table_repo
            .update(params)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "A table with this code already exists"))?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a table that has no current bill.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if BillRepository::new(&txn)
            .find_current_for_table(id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Cannot delete a table with an active bill".to_string(),
            ));
        }

        if !TableRepository::new(&txn).delete(id).await? {
            return Err(AppError::NotFound("Table not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }
}

fn validate_label(label: String) -> Result<String, ValidationError> {
    let label = label.trim().to_string();
    if label.is_empty() {
        return Err(ValidationError::field("label", "Label is required"));
    }

    Ok(label)
}
