//! Bill domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::BillState;

use crate::model::bill::{BillDto, BillPlateDto, BillStateDto, EditBillDto, KitchenPlateDto};

pub fn bill_state_into_dto(state: BillState) -> BillStateDto {
    match state {
        BillState::Current => BillStateDto::Current,
        BillState::Closed => BillStateDto::Closed,
    }
}

pub fn bill_state_from_dto(state: BillStateDto) -> BillState {
    match state {
        BillStateDto::Current => BillState::Current,
        BillStateDto::Closed => BillState::Closed,
    }
}

/// One ordered unit on a bill.
#[derive(Debug, Clone, PartialEq)]
pub struct BillPlate {
    pub id: i32,
    pub bill_id: i32,
    pub plate_id: i32,
    pub notes: String,
    pub cooked: bool,
    pub cooked_at: Option<DateTime<Utc>>,
}

impl BillPlate {
    pub fn from_entity(entity: entity::bill_plate::Model) -> Self {
        Self {
            id: entity.id,
            bill_id: entity.bill_id,
            plate_id: entity.plate_id,
            notes: entity.notes,
            cooked: entity.cooked,
            cooked_at: entity.cooked_at,
        }
    }

    pub fn into_dto(self) -> BillPlateDto {
        BillPlateDto {
            id: self.id,
            plate: self.plate_id,
            notes: self.notes,
            cooked: self.cooked,
            cooked_at: self.cooked_at,
        }
    }
}

/// Bill with its line items.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: i32,
    pub code: String,
    pub table_id: Option<i32>,
    pub waiter_id: Option<i32>,
    pub date_time: DateTime<Utc>,
    pub state: BillState,
    pub total: f64,
    pub total_paid: f64,
    pub tip: i32,
    pub plates: Vec<BillPlate>,
}

impl Bill {
    /// Builds the domain model from a bill row and its line items.
    pub fn from_entity(entity: entity::bill::Model, plates: Vec<entity::bill_plate::Model>) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            table_id: entity.table_id,
            waiter_id: entity.waiter_id,
            date_time: entity.date_time,
            state: entity.state,
            total: entity.total,
            total_paid: entity.total_paid,
            tip: entity.tip,
            plates: plates.into_iter().map(BillPlate::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> BillDto {
        BillDto {
            id: self.id,
            code: self.code,
            table: self.table_id,
            waiter: self.waiter_id,
            date_time: self.date_time,
            state: bill_state_into_dto(self.state),
            total: self.total,
            total_paid: self.total_paid,
            tip: self.tip,
            plates: self.plates.into_iter().map(BillPlate::into_dto).collect(),
        }
    }
}

/// How the waiter of a new bill is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaiterAssignment {
    /// A specific waiter account, used by the manual creation endpoints.
    Explicit(i32),
    /// The active waiter with the fewest current bills.
    LeastLoaded,
}

/// Which bills a caller may read or modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillAccess {
    /// Admins act on every bill.
    All,
    /// Waiters act on the bills assigned to them.
    OwnedBy(i32),
}

#[derive(Debug, Clone, Copy)]
pub struct CreateBillParams {
    pub table_id: i32,
    pub waiter: WaiterAssignment,
}

/// Admin edit of a bill's table, waiter or state.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateBillParams {
    pub id: i32,
    pub table_id: Option<i32>,
    pub waiter_id: Option<i32>,
    pub state: Option<BillState>,
}

impl UpdateBillParams {
    pub fn from_dto(id: i32, dto: EditBillDto) -> Self {
        Self {
            id,
            table_id: dto.table,
            waiter_id: dto.waiter,
            state: dto.state.map(bill_state_from_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddPlateParams {
    pub bill_id: i32,
    pub plate_id: i32,
    pub quantity: i32,
    pub notes: String,
}

#[derive(Debug, Clone, Copy)]
pub struct FinalizeBillParams {
    pub bill_id: i32,
    pub amount_paid: f64,
    pub tip_percentage: f64,
}

/// Line item joined with its bill and plate, for the kitchen queue.
#[derive(Debug, Clone, PartialEq)]
pub struct KitchenPlate {
    pub id: i32,
    pub bill_id: i32,
    pub bill_code: String,
    pub table_id: Option<i32>,
    pub plate_id: i32,
    pub plate_name: String,
    pub notes: String,
    pub cooked: bool,
    pub cooked_at: Option<DateTime<Utc>>,
}

impl KitchenPlate {
    pub fn into_dto(self) -> KitchenPlateDto {
        KitchenPlateDto {
            id: self.id,
            bill: self.bill_id,
            bill_code: self.bill_code,
            table: self.table_id,
            plate: self.plate_id,
            plate_name: self.plate_name,
            notes: self.notes,
            cooked: self.cooked,
            cooked_at: self.cooked_at,
        }
    }
}
