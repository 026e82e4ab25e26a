//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values increase monotonically across all factories so generated usernames, codes and
/// labels never collide inside one test binary.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a waiter, an available table and a current bill on that table.
///
/// # Returns
/// - `Ok((waiter, table, bill))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_bill_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::dining_table::Model,
        entity::bill::Model,
    ),
    DbErr,
> {
    let waiter = factory::user::create_waiter(db).await?;
    let table = factory::dining_table::create_table(db).await?;
    let bill = factory::bill::BillFactory::new(db, table.id)
        .waiter_id(Some(waiter.id))
        .build()
        .await?;

    Ok((waiter, table, bill))
}
