//! User service for business logic.
//!
//! Provides the `UserService` for account creation and admin maintenance. Field checks
//! happen here so both self-registration and the admin endpoints report the same
//! per-field errors.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{validation::ValidationError, AppError},
    model::user::{CreateUserParams, NewUser, Roles, UpdateUserParams, User},
    service::auth::hash_password,
    util::validate::is_valid_email,
};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Username of the account created on first startup.
pub const BOOTSTRAP_ADMIN_USERNAME: &str = "admin";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account with the given roles.
    ///
    /// Validates the username, name, email and password, checks username and email
    /// uniqueness, then stores an argon2 hash of the password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Validation)` - One or more fields rejected
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let username = params.username.trim().to_string();
        let email = params.email.trim().to_string();
        let name = params.name.trim().to_string();

        let mut errors = ValidationError::new("Invalid user data");
        if username.is_empty() {
            errors.add("username", "Username is required");
        } else if user_repo.username_exists(&username, None).await? {
            errors.add("username", "Username is already taken");
        }
        if name.is_empty() {
            errors.add("name", "Name is required");
        }
        if !is_valid_email(&email) {
            errors.add("email", "Email is not valid");
        } else if user_repo.email_exists(&email, None).await? {
            errors.add("email", "Email is already registered");
        }
        if params.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.add(
                "password",
                format!("Password must be at least {MIN_PASSWORD_CHARS} characters"),
            );
        }
        errors.into_result()?;

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(NewUser {
                username,
                email,
                name,
                phone_number: params
                    .phone_number
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty()),
                password_hash,
                roles: params.roles,
                is_active: params.is_active,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Username or email is already taken"))?;

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(id).await?;

        Ok(user)
    }

    /// All accounts ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users)
    }

    /// Applies a partial update, re-hashing the password when one is given.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated account
    /// - `Err(AppError::NotFound)` - No account with that id
    /// - `Err(AppError::Validation)` - One or more fields rejected
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let params = UpdateUserParams {
            username: params.username.map(|u| u.trim().to_string()),
            email: params.email.map(|e| e.trim().to_string()),
            name: params.name.map(|n| n.trim().to_string()),
            phone_number: params.phone_number.map(|p| p.trim().to_string()),
            ..params
        };

        let mut errors = ValidationError::new("Invalid user data");
        if let Some(username) = &params.username {
            if username.is_empty() {
                errors.add("username", "Username is required");
            } else if user_repo.username_exists(username, Some(params.id)).await? {
                errors.add("username", "Username is already taken");
            }
        }
        if let Some(name) = &params.name {
            if name.is_empty() {
                errors.add("name", "Name is required");
            }
        }
        if let Some(email) = &params.email {
            if !is_valid_email(email) {
                errors.add("email", "Email is not valid");
            } else if user_repo.email_exists(email, Some(params.id)).await? {
                errors.add("email", "Email is already registered");
            }
        }
        if let Some(password) = &params.password {
            if password.chars().count() < MIN_PASSWORD_CHARS {
                errors.add(
                    "password",
                    format!("Password must be at least {MIN_PASSWORD_CHARS} characters"),
                );
            }
        }
        errors.into_result()?;

        let password_hash = params.password.as_deref().map(hash_password).transpose()?;

        let user = user_repo
            .update(params, password_hash)
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Username or email is already taken"))?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    /// Deletes an account.
    ///
    /// # Arguments
    /// - `id` - Account to delete
    /// - `acting_user_id` - Admin performing the deletion; an admin cannot delete themself
    pub async fn delete(&self, id: i32, acting_user_id: i32) -> Result<(), AppError> {
        if id == acting_user_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    /// Creates the first admin account when none exists.
    ///
    /// # Returns
    /// - `Ok(Some(password))` - An admin was created with this generated password
    /// - `Ok(None)` - An admin already exists
    pub async fn ensure_admin(&self) -> Result<Option<String>, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.admin_exists().await? {
            return Ok(None);
        }

        let password = generate_password();
        let password_hash = hash_password(&password)?;

        user_repo
            .create(NewUser {
                username: BOOTSTRAP_ADMIN_USERNAME.to_string(),
                email: "admin@localhost.localdomain".to_string(),
                name: "Administrator".to_string(),
                phone_number: None,
                password_hash,
                roles: Roles {
                    admin: true,
                    waiter: false,
                    kitchen: false,
                },
                is_active: true,
            })
            .await
            .map_err(|e| {
                AppError::conflict_on_unique(
                    e,
                    "Cannot bootstrap admin: the admin username or email is already in use",
                )
            })?;

        Ok(Some(password))
    }
}

/// Random 20-character alphanumeric password.
fn generate_password() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";
    const PASSWORD_LENGTH: usize = 20;

    let mut rng = rand::rng();

    (0..PASSWORD_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
