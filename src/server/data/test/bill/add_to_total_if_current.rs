use super::*;

/// Tests incrementing the total of a current bill.
///
/// Verifies that repeated increments accumulate on top of the stored total.
///
/// Expected: Ok(true) and total 37.5
#[tokio::test]
async fn increments_current_bill_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;

    let repo = BillRepository::new(db);
    assert!(repo.add_to_total_if_current(bill.id, 25.0).await?);
    assert!(repo.add_to_total_if_current(bill.id, 12.5).await?);

    let stored = repo.find_by_id(bill.id).await?.unwrap();
    assert_eq!(stored.total, 37.5);

    Ok(())
}

/// Tests that closed bills are left untouched.
///
/// Verifies that the increment is guarded on the `current` state.
///
/// Expected: Ok(false) and unchanged total
#[tokio::test]
async fn ignores_closed_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;
    let bill = factory::bill::BillFactory::new(db, table.id)
        .state(BillState::Closed)
        .total(50.0)
        .build()
        .await?;

    let repo = BillRepository::new(db);
    let updated = repo.add_to_total_if_current(bill.id, 10.0).await?;

    assert!(!updated);
    let stored = repo.find_by_id(bill.id).await?.unwrap();
    assert_eq!(stored.total, 50.0);

    Ok(())
}

/// Tests incrementing a bill that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillRepository::new(db);
    let updated = repo.add_to_total_if_current(999, 10.0).await?;

    assert!(!updated);

    Ok(())
}
