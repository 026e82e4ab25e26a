use crate::server::{data::reservation::ReservationRepository, model::reservation::ReservationLookup};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::ReservationState;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign_table_if_active;
mod cancel_if_active;
