use super::*;

/// Tests the kitchen queue contents.
///
/// Verifies that only uncooked items on `current` bills are listed, with the bill code and
/// plate name attached.
///
/// Expected: Ok with the single pending item
#[tokio::test]
async fn lists_uncooked_items_on_current_bills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, table, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::plate::PlateFactory::new(db)
        .name("Enchiladas")
        .build()
        .await?;
    let pending = factory::bill_plate::create_bill_plate(db, bill.id, plate.id).await?;
    factory::bill_plate::BillPlateFactory::new(db, bill.id, plate.id)
        .cooked(true)
        .build()
        .await?;

    let closed_table = factory::create_table(db).await?;
    let closed = factory::bill::BillFactory::new(db, closed_table.id)
        .state(BillState::Closed)
        .build()
        .await?;
    factory::bill_plate::create_bill_plate(db, closed.id, plate.id).await?;

    let repo = BillPlateRepository::new(db);
    let items = repo.get_pending().await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, pending.id);
    assert_eq!(items[0].bill_code, bill.code);
    assert_eq!(items[0].table_id, Some(table.id));
    assert_eq!(items[0].plate_name, "Enchiladas");

    Ok(())
}

/// Tests the queue order.
///
/// Expected: items in insertion order
#[tokio::test]
async fn lists_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::create_plate(db).await?;
    let first = factory::bill_plate::create_bill_plate(db, bill.id, plate.id).await?;
    let second = factory::bill_plate::create_bill_plate(db, bill.id, plate.id).await?;

    let repo = BillPlateRepository::new(db);
    let items = repo.get_pending().await?;

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
