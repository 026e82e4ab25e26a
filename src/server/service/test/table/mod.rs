use entity::sea_orm_active_enums::TableState;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::table::{CreateTableParams, UpdateTableParams},
    service::table::TableService,
};

mod create;
mod delete;
mod delete_area;
