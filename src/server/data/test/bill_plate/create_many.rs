use super::*;

/// Tests inserting one row per ordered unit.
///
/// Verifies that `quantity` rows are created, all uncooked and carrying the same notes.
///
/// Expected: Ok with exactly 3 rows
#[tokio::test]
async fn inserts_one_row_per_unit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::create_plate(db).await?;

    let repo = BillPlateRepository::new(db);
    repo.create_many(bill.id, plate.id, "no onion", 3).await?;

    let rows = entity::prelude::BillPlate::find()
        .filter(entity::bill_plate::Column::BillId.eq(bill.id))
        .all(db)
        .await?;

    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.plate_id == plate.id));
    assert!(rows.iter().all(|row| row.notes == "no onion"));
    assert!(rows.iter().all(|row| !row.cooked && row.cooked_at.is_none()));

    Ok(())
}

/// Tests that line items cascade with their bill.
///
/// Expected: no rows left after the bill is deleted
#[tokio::test]
async fn rows_are_removed_with_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::create_plate(db).await?;

    let repo = BillPlateRepository::new(db);
    repo.create_many(bill.id, plate.id, "", 2).await?;

    entity::prelude::Bill::delete_by_id(bill.id).exec(db).await?;

    let remaining = entity::prelude::BillPlate::find().count(db).await?;
    assert_eq!(remaining, 0);

    Ok(())
}

/// Tests a quantity spanning several insert batches.
///
/// Verifies that 2500 units, more than two full batches, are all stored.
///
/// Expected: Ok with exactly 2500 rows
#[tokio::test]
async fn inserts_quantities_larger_than_one_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::create_plate(db).await?;

    let quantity = INSERT_CHUNK_ROWS * 2 + 500;
    BillPlateRepository::new(db)
        .create_many(bill.id, plate.id, "", quantity)
        .await?;

    let stored = entity::prelude::BillPlate::find()
        .filter(entity::bill_plate::Column::BillId.eq(bill.id))
        .count(db)
        .await?;
    assert_eq!(stored, quantity as u64);

    Ok(())
}
