use crate::server::{
    data::{bill::BillRepository, reservation::ReservationRepository, table::TableRepository},
    error::AppError,
    model::bill::{
        AddPlateParams, BillAccess, CreateBillParams, FinalizeBillParams, UpdateBillParams,
        WaiterAssignment,
    },
    service::bill::{bill_insert_error, BillService},
};
use entity::sea_orm_active_enums::{BillState, ReservationState, TableState};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod add_plate;
mod create;
mod delete;
mod finalize;

/// Unwraps the per-field reason of a validation error.
fn validation_reason(err: &AppError, field: &str) -> Option<String> {
    match err {
        AppError::Validation(errors) => errors.reason(field).map(str::to_string),
        _ => None,
    }
}
