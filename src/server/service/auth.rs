//! Authentication service for registration and username/password login.
//!
//! Passwords are stored as argon2 PHC strings. Session handling lives in the controller and
//! `AuthSession`; this service only decides who the caller is.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, Roles, User},
    service::user::UserService,
};

/// Hashes a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();

    Ok(hash)
}

/// Checks a plaintext password against a stored hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Self-registration of a client account.
    ///
    /// Any role flags in `params` are discarded; registered accounts are active clients.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Validation)` - Invalid or already taken fields
    pub async fn register(&self, params: CreateUserParams) -> Result<User, AppError> {
        let params = CreateUserParams {
            roles: Roles::default(),
            is_active: true,
            ..params
        };

        let user = UserService::new(self.db).create(params).await?;

        tracing::info!("Registered client account {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Verifies credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match an active account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    /// - `Err(AuthError::UserInactive)` - Correct credentials for a deactivated account
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, hash)) = user_repo.find_credentials(username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        Ok(user)
    }
}
