use super::*;

/// Tests loading a bill owned by the waiter.
///
/// Verifies that the bill is returned together with its line items.
///
/// Expected: Ok(Some) with two line items
#[tokio::test]
async fn returns_own_bill_with_plates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (waiter, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::create_plate(db).await?;
    factory::bill_plate::create_bill_plate(db, bill.id, plate.id).await?;
    factory::bill_plate::create_bill_plate(db, bill.id, plate.id).await?;

    let repo = BillRepository::new(db);
    let found = repo.find_by_id_for_waiter(bill.id, waiter.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, bill.id);
    assert_eq!(found.plates.len(), 2);

    Ok(())
}

/// Tests that another waiter's bill is hidden.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_other_waiters_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let other = factory::create_waiter(db).await?;

    let repo = BillRepository::new(db);
    let found = repo.find_by_id_for_waiter(bill.id, other.id).await?;

    assert!(found.is_none());

    Ok(())
}
