//! User domain models and parameters.
//!
//! An account holds any combination of the admin, waiter and kitchen roles. Accounts without
//! a role are restaurant clients.

use chrono::{DateTime, Utc};

use crate::model::user::{CreateUserDto, RegisterUserDto, UpdateUserDto, UserDto};

/// Capability set of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Roles {
    pub admin: bool,
    pub waiter: bool,
    pub kitchen: bool,
}

impl Roles {
    pub fn is_client(&self) -> bool {
        !self.admin && !self.waiter && !self.kitchen
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub roles: Roles,
    pub is_active: bool,
    pub date_created: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            name: self.name,
            phone_number: self.phone_number,
            is_admin: self.roles.admin,
            is_waiter: self.roles.waiter,
            is_kitchen: self.roles.kitchen,
            is_active: self.is_active,
            date_created: self.date_created,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash stays behind; it is only read by the credential check.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            name: entity.name,
            phone_number: entity.phone_number,
            roles: Roles {
                admin: entity.is_admin,
                waiter: entity.is_waiter,
                kitchen: entity.is_kitchen,
            },
            is_active: entity.is_active,
            date_created: entity.date_created,
        }
    }
}

/// Parameters for creating an account. `password` is plaintext and hashed by the service.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub password: String,
    pub roles: Roles,
    pub is_active: bool,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            name: dto.name,
            phone_number: dto.phone_number,
            password: dto.password,
            roles: Roles {
                admin: dto.is_admin,
                waiter: dto.is_waiter,
                kitchen: dto.is_kitchen,
            },
            is_active: dto.is_active,
        }
    }

    /// Self-registered accounts are active clients.
    pub fn from_register_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            name: dto.name,
            phone_number: dto.phone_number,
            password: dto.password,
            roles: Roles::default(),
            is_active: true,
        }
    }
}

/// Parameters for the repository insert, after hashing.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
    pub roles: Roles,
    pub is_active: bool,
}

/// Partial account update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
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

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        Self {
            id,
            username: dto.username,
            email: dto.email,
            name: dto.name,
            phone_number: dto.phone_number,
            password: dto.password,
            is_admin: dto.is_admin,
            is_waiter: dto.is_waiter,
            is_kitchen: dto.is_kitchen,
            is_active: dto.is_active,
        }
    }
}
