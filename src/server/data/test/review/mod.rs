use crate::server::{data::review::ReviewRepository, model::review::ReviewRecord};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;

fn record(user_id: i32, content: &str) -> ReviewRecord {
    ReviewRecord {
        user_id,
        title: None,
        content: content.to_string(),
        score: None,
        created_at: Utc::now(),
    }
}
