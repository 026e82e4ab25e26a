use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TableStateDto {
    Available,
    Occupied,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TableAreaDto {
    pub id: i32,
    pub label: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TableAreaListDto {
    pub areas: Vec<TableAreaDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SaveTableAreaDto {
    pub label: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TableDto {
    pub id: i32,
    pub code: String,
    pub capacity: i32,
    pub state: TableStateDto,
    pub area: Option<i32>,
    pub notes: Option<String>,
    /// Code of the table's current bill, if one is open.
    pub active_bill_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TableListDto {
    pub tables: Vec<TableDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateTableDto {
    pub code: String,
    pub capacity: i32,
    pub area: Option<i32>,
    pub notes: Option<String>,
}

/// Partial table update. `state` may only change while the table has no current bill.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateTableDto {
    pub code: Option<String>,
    pub capacity: Option<i32>,
    pub state: Option<TableStateDto>,
    /// `Some(None)` clears the area; omitting the field keeps it.
    #[serde(default, deserialize_with = "crate::model::api::deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub area: Option<Option<i32>>,
    pub notes: Option<String>,
}
