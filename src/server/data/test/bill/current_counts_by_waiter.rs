use super::*;

/// Tests counting current bills per waiter.
///
/// Verifies that only `current` bills are counted and waiters without any are absent.
///
/// Expected: Ok with {w1: 2, w2: 1}
#[tokio::test]
async fn counts_only_current_bills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let w1 = factory::create_waiter(db).await?;
    let w2 = factory::create_waiter(db).await?;
    let w3 = factory::create_waiter(db).await?;

    for waiter_id in [w1.id, w1.id, w2.id] {
        let table = factory::create_table(db).await?;
        factory::bill::BillFactory::new(db, table.id)
            .waiter_id(Some(waiter_id))
            .build()
            .await?;
    }
    let table = factory::create_table(db).await?;
    factory::bill::BillFactory::new(db, table.id)
        .waiter_id(Some(w3.id))
        .state(BillState::Closed)
        .build()
        .await?;

    let repo = BillRepository::new(db);
    let counts = repo.current_counts_by_waiter().await?;

    assert_eq!(counts.get(&w1.id), Some(&2));
    assert_eq!(counts.get(&w2.id), Some(&1));
    assert!(!counts.contains_key(&w3.id));

    Ok(())
}

/// Tests that bills without a waiter are skipped.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn skips_bills_without_waiter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;
    factory::create_bill(db, table.id).await?;

    let repo = BillRepository::new(db);
    let counts = repo.current_counts_by_waiter().await?;

    assert!(counts.is_empty());

    Ok(())
}
