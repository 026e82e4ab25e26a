//! Human-readable unique codes for reservations and bills.
//!
//! Codes look like `RES-7KQ2ZD` or `CUE-0M4TXA`: a fixed prefix and six random characters
//! drawn from `A-Z0-9`. Candidates are checked against the owning table and regenerated on
//! collision, up to `MAX_ATTEMPTS` times.

use std::future::Future;

use rand::Rng;
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{
    data::{bill::BillRepository, reservation::ReservationRepository},
    error::{code::CodeGenerationError, AppError},
};

pub const RESERVATION_PREFIX: &str = "RES";
pub const BILL_PREFIX: &str = "CUE";

/// Number of random characters after the prefix.
pub const CODE_LENGTH: usize = 6;

/// Candidates tried before giving up.
pub const MAX_ATTEMPTS: usize = 100;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Builds one candidate code without checking uniqueness.
pub fn random_code(prefix: &str) -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();

    format!("{prefix}-{suffix}")
}

/// Generates a code that `exists` reports as unused.
///
/// # Arguments
/// - `prefix` - Code prefix, without the dash
/// - `exists` - Uniqueness check against the owning table
///
/// # Returns
/// - `Ok(String)` - Unused code
/// - `Err(AppError::CodeGeneration)` - Every attempt collided
/// - `Err(AppError::DbErr)` - The uniqueness check failed
pub async fn generate_unique_code<F, Fut>(
    prefix: &'static str,
    mut exists: F,
) -> Result<String, AppError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, DbErr>>,
{
    for _ in 0..MAX_ATTEMPTS {
        let code = random_code(prefix);
        if !exists(code.clone()).await? {
            return Ok(code);
        }
    }

    tracing::error!(
        "Exhausted {} attempts generating a unique {} code",
        MAX_ATTEMPTS,
        prefix
    );

    Err(CodeGenerationError::ExhaustedRetries {
        prefix,
        attempts: MAX_ATTEMPTS,
    }
    .into())
}

/// Unused `RES-` code.
pub async fn generate_reservation_code<C: ConnectionTrait>(db: &C) -> Result<String, AppError> {
    let repo = ReservationRepository::new(db);
    let repo = &repo;

    generate_unique_code(RESERVATION_PREFIX, move |code| async move {
        repo.code_exists(&code).await
    })
    .await
}

/// Unused `CUE-` code.
pub async fn generate_bill_code<C: ConnectionTrait>(db: &C) -> Result<String, AppError> {
    let repo = BillRepository::new(db);
    let repo = &repo;

    generate_unique_code(BILL_PREFIX, move |code| async move { repo.code_exists(&code).await })
        .await
}
