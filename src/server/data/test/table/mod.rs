use crate::server::data::table::TableRepository;
use entity::sea_orm_active_enums::{BillState, TableState};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod code_exists;
mod get_all_with_active_bill;
mod set_state;
