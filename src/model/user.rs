use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub is_admin: bool,
    pub is_waiter: bool,
    pub is_kitchen: bool,
    pub is_active: bool,
    pub date_created: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}

/// Public self-registration. Registered accounts never receive a role.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RegisterUserDto {
    pub username: String,
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_waiter: bool,
    #[serde(default)]
    pub is_kitchen: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Partial account update; omitted fields keep their current value.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
    pub is_admin: Option<bool>,
    pub is_waiter: Option<bool>,
    pub is_kitchen: Option<bool>,
    pub is_active: Option<bool>,
}
