use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BillStateDto {
    Current,
    Closed,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BillPlateDto {
    pub id: i32,
    pub plate: i32,
    pub notes: String,
    pub cooked: bool,
    pub cooked_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BillDto {
    pub id: i32,
    pub code: String,
    pub table: Option<i32>,
    pub waiter: Option<i32>,
    pub date_time: DateTime<Utc>,
    pub state: BillStateDto,
    pub total: f64,
    pub total_paid: f64,
    /// Tip percentage recorded at finalization.
    pub tip: i32,
    pub plates: Vec<BillPlateDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct BillListDto {
    pub bills: Vec<BillDto>,
}

/// Opens a bill on a table. Without `waiter` the least-loaded waiter is assigned.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateBillDto {
    pub table: i32,
    pub waiter: Option<i32>,
}

/// Partial bill update. Omitted fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct EditBillDto {
    pub table: Option<i32>,
    pub waiter: Option<i32>,
    pub state: Option<BillStateDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AddPlateDto {
    pub plate_id: i32,
    pub quantity: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct FinalizeBillDto {
    pub amount_paid: f64,
    pub tip_percentage: Option<f64>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MarkCookedDto {
    pub cooked: Option<bool>,
}

/// Line item as seen from the kitchen queue.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct KitchenPlateDto {
    pub id: i32,
    pub bill: i32,
    pub bill_code: String,
    pub table: Option<i32>,
    pub plate: i32,
    pub plate_name: String,
    pub notes: String,
    pub cooked: bool,
    pub cooked_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct KitchenPlateListDto {
    pub plates: Vec<KitchenPlateDto>,
}
