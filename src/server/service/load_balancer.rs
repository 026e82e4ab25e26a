//! Waiter selection for automatically created bills.

use rand::seq::IndexedRandom;
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::{bill::BillRepository, user::UserRepository};

/// Picks the active waiter currently serving the fewest `current` bills.
pub struct WaiterLoadBalancer<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaiterLoadBalancer<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Chooses a waiter for a new bill.
    ///
    /// Only active waiter accounts are considered. Ties on the minimum load are broken
    /// uniformly at random.
    ///
    /// # Returns
    /// - `Ok(Some(waiter_id))` - Least-loaded waiter
    /// - `Ok(None)` - No active waiter account exists
    /// - `Err(DbErr)` - Database error while counting
    pub async fn pick_least_loaded_waiter(&self) -> Result<Option<i32>, DbErr> {
        let waiter_ids = UserRepository::new(self.db).get_active_waiter_ids().await?;
        if waiter_ids.is_empty() {
            return Ok(None);
        }

        let counts = BillRepository::new(self.db)
            .current_counts_by_waiter()
            .await?;
        let loads: Vec<(i32, i64)> = waiter_ids
            .into_iter()
            .map(|id| (id, counts.get(&id).copied().unwrap_or(0)))
            .collect();

        Ok(pick_random(&least_loaded(&loads)))
    }
}

/// Ids sharing the minimum load.
pub fn least_loaded(loads: &[(i32, i64)]) -> Vec<i32> {
    let Some(min) = loads.iter().map(|(_, load)| *load).min() else {
        return Vec::new();
    };

    loads
        .iter()
        .filter(|(_, load)| *load == min)
        .map(|(id, _)| *id)
        .collect()
}

fn pick_random(candidates: &[i32]) -> Option<i32> {
    candidates.choose(&mut rand::rng()).copied()
}
