use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParams, Roles},
    service::user::UserService,
};

mod create;

fn params(username: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: email.to_string(),
        name: "Luis Pérez".to_string(),
        phone_number: None,
        password: "s3cure-pass".to_string(),
        roles: Roles {
            admin: false,
            waiter: true,
            kitchen: false,
        },
        is_active: true,
    }
}
