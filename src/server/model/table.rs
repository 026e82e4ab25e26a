//! Table and table area domain models.

use entity::sea_orm_active_enums::TableState;

use crate::model::table::{
    CreateTableDto, TableAreaDto, TableDto, TableStateDto, UpdateTableDto,
};

pub fn table_state_into_dto(state: TableState) -> TableStateDto {
    match state {
        TableState::Available => TableStateDto::Available,
        TableState::Occupied => TableStateDto::Occupied,
    }
}

pub fn table_state_from_dto(state: TableStateDto) -> TableState {
    match state {
        TableStateDto::Available => TableState::Available,
        TableStateDto::Occupied => TableState::Occupied,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableArea {
    pub id: i32,
    pub label: String,
}

impl TableArea {
    pub fn from_entity(entity: entity::table_area::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
        }
    }

    pub fn into_dto(self) -> TableAreaDto {
        TableAreaDto {
            id: self.id,
            label: self.label,
        }
    }
}

/// Dining table with occupancy state.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: i32,
    pub code: String,
    pub capacity: i32,
    pub state: TableState,
    pub area_id: Option<i32>,
    pub notes: Option<String>,
}

impl Table {
    pub fn from_entity(entity: entity::dining_table::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            capacity: entity.capacity,
            state: entity.state,
            area_id: entity.area_id,
            notes: entity.notes,
        }
    }

    /// Converts to a DTO, attaching the code of the table's current bill if any.
    pub fn into_dto(self, active_bill_code: Option<String>) -> TableDto {
        TableDto {
            id: self.id,
            code: self.code,
            capacity: self.capacity,
            state: table_state_into_dto(self.state),
            area: self.area_id,
            notes: self.notes,
            active_bill_code,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTableParams {
    pub code: String,
    pub capacity: i32,
    pub area_id: Option<i32>,
    pub notes: Option<String>,
}

impl CreateTableParams {
    pub fn from_dto(dto: CreateTableDto) -> Self {
        Self {
            code: dto.code,
            capacity: dto.capacity,
            area_id: dto.area,
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTableParams {
    pub id: i32,
    pub code: Option<String>,
    pub capacity: Option<i32>,
    pub state: Option<TableState>,
    /// Outer option for presence, inner for the nullable value.
    pub area_id: Option<Option<i32>>,
    pub notes: Option<String>,
}

impl UpdateTableParams {
    pub fn from_dto(id: i32, dto: UpdateTableDto) -> Self {
        Self {
            id,
            code: dto.code,
            capacity: dto.capacity,
            state: dto.state.map(table_state_from_dto),
            area_id: dto.area,
            notes: dto.notes,
        }
    }
}
