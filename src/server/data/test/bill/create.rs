use super::*;

/// Tests creating a bill on a free table.
///
/// Verifies that the bill is stored as `current` with zero totals and no line items.
///
/// Expected: Ok with the new bill
#[tokio::test]
async fn creates_current_bill_with_zero_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let waiter = factory::create_waiter(db).await?;
    let table = factory::create_table(db).await?;

    let repo = BillRepository::new(db);
    let bill = repo
        .create("CUE-ABC123".to_string(), table.id, Some(waiter.id))
        .await?;

    assert_eq!(bill.code, "CUE-ABC123");
    assert_eq!(bill.table_id, Some(table.id));
    assert_eq!(bill.waiter_id, Some(waiter.id));
    assert_eq!(bill.state, BillState::Current);
    assert_eq!(bill.total, 0.0);
    assert_eq!(bill.total_paid, 0.0);
    assert_eq!(bill.tip, 0);
    assert!(bill.plates.is_empty());

    Ok(())
}

/// Tests the one-current-bill-per-table constraint.
///
/// Verifies that inserting a second `current` bill for the same table is rejected by the
/// partial unique index.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_second_current_bill_for_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;

    let repo = BillRepository::new(db);
    repo.create("CUE-AAAAAA".to_string(), table.id, None).await?;
    let result = repo.create("CUE-BBBBBB".to_string(), table.id, None).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that closed bills do not block a new one.
///
/// Verifies that a table whose previous bill is closed can get a new `current` bill.
///
/// Expected: Ok with the new bill
#[tokio::test]
async fn allows_new_bill_after_previous_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;
    factory::bill::BillFactory::new(db, table.id)
        .state(BillState::Closed)
        .build()
        .await?;

    let repo = BillRepository::new(db);
    let result = repo.create("CUE-CCCCCC".to_string(), table.id, None).await;

    assert!(result.is_ok());

    Ok(())
}
