use crate::server::data::bill_plate::{BillPlateRepository, INSERT_CHUNK_ROWS};
use chrono::Utc;
use entity::sea_orm_active_enums::BillState;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod get_pending;
