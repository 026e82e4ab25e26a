//! User factory for creating test accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("maria")
///     .waiter(true)
///     .kitchen(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    name: String,
    phone_number: Option<String>,
    password_hash: String,
    is_admin: bool,
    is_waiter: bool,
    is_kitchen: bool,
    is_active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - email: `"user_{id}@example.com"`
    /// - name: `"User {id}"`
    /// - password_hash: a placeholder that never verifies
    /// - no roles, active
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            email: format!("user_{}@example.com", id),
            name: format!("User {}", id),
            phone_number: None,
            password_hash: "not-a-hash".to_string(),
            is_admin: false,
            is_waiter: false,
            is_kitchen: false,
            is_active: true,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn phone_number(mut self, phone_number: Option<String>) -> Self {
        self.phone_number = phone_number;
        self
    }

    /// Sets the stored password hash. Use a real argon2 hash when testing login.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.is_admin = admin;
        self
    }

    pub fn waiter(mut self, waiter: bool) -> Self {
        self.is_waiter = waiter;
        self
    }

    pub fn kitchen(mut self, kitchen: bool) -> Self {
        self.is_kitchen = kitchen;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            phone_number: ActiveValue::Set(self.phone_number),
            password_hash: ActiveValue::Set(self.password_hash),
            is_admin: ActiveValue::Set(self.is_admin),
            is_waiter: ActiveValue::Set(self.is_waiter),
            is_kitchen: ActiveValue::Set(self.is_kitchen),
            is_active: ActiveValue::Set(self.is_active),
            date_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client account (no roles) with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an active waiter account with default values.
pub async fn create_waiter(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).waiter(true).build().await
}

/// Creates an admin account with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).admin(true).build().await
}
