use super::*;

fn params(bill_id: i32, plate_id: i32, quantity: i32) -> AddPlateParams {
    AddPlateParams {
        bill_id,
        plate_id,
        quantity,
        notes: String::new(),
    }
}

/// Tests adding several units of one plate.
///
/// Verifies that one line item is stored per unit and the total grows by price times
/// quantity.
///
/// Expected: Ok(Bill) with total 37.50 and 3 line items
#[tokio::test]
async fn adds_one_row_per_unit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::plate::create_plate_with_price(db, 12.50).await?;

    let bill = BillService::new(db)
        .add_plate(BillAccess::All, params(bill.id, plate.id, 3))
        .await?;

    assert_eq!(bill.total, 37.50);
    assert_eq!(bill.plates.len(), 3);
    assert!(bill.plates.iter().all(|p| p.plate_id == plate.id && !p.cooked));

    Ok(())
}

/// Tests a quantity large enough to exceed a single insert statement.
///
/// Verifies that 7000 units are all stored and the total reflects every unit.
///
/// Expected: Ok(Bill) with total 7000.00 and 7000 line items
#[tokio::test]
async fn adds_quantities_beyond_one_statement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::plate::create_plate_with_price(db, 1.0).await?;

    let bill = BillService::new(db)
        .add_plate(BillAccess::All, params(bill.id, plate.id, 7000))
        .await?;

    assert_eq!(bill.total, 7000.0);
    assert_eq!(bill.plates.len(), 7000);

    Ok(())
}

/// Tests that notes are copied onto every unit.
///
/// Expected: Ok(Bill) whose line items all carry the notes
#[tokio::test]
async fn copies_notes_to_every_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::create_plate(db).await?;

    let bill = BillService::new(db)
        .add_plate(
            BillAccess::All,
            AddPlateParams {
                notes: "sin cebolla".to_string(),
                ..params(bill.id, plate.id, 2)
            },
        )
        .await?;

    assert_eq!(bill.plates.len(), 2);
    assert!(bill.plates.iter().all(|p| p.notes == "sin cebolla"));

    Ok(())
}

/// Tests adding to a closed bill.
///
/// Verifies that no line item is stored.
///
/// Expected: Err(AppError::Validation) with `bill_valid`
#[tokio::test]
async fn rejects_closed_bill() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;
    let bill = factory::bill::BillFactory::new(db, table.id)
        .state(BillState::Closed)
        .build()
        .await?;
    let plate = factory::create_plate(db).await?;

    let err = BillService::new(db)
        .add_plate(BillAccess::All, params(bill.id, plate.id, 1))
        .await
        .unwrap_err();

    assert_eq!(
        validation_reason(&err, "bill").as_deref(),
        Some("Cannot add plates to a closed bill")
    );
    let rows = entity::prelude::BillPlate::find().count(db).await?;
    assert_eq!(rows, 0);

    Ok(())
}

/// Tests adding a plate that is off the menu.
///
/// Expected: Err(AppError::Validation) with `plate_valid`
#[tokio::test]
async fn rejects_unavailable_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::plate::PlateFactory::new(db)
        .available(false)
        .build()
        .await?;

    let err = BillService::new(db)
        .add_plate(BillAccess::All, params(bill.id, plate.id, 1))
        .await
        .unwrap_err();

    assert_eq!(
        validation_reason(&err, "plate").as_deref(),
        Some("Plate is not available")
    );

    Ok(())
}

/// Tests a zero quantity.
///
/// Expected: Err(AppError::Validation) with `quantity_valid`
#[tokio::test]
async fn rejects_zero_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let plate = factory::create_plate(db).await?;

    let err = BillService::new(db)
        .add_plate(BillAccess::All, params(bill.id, plate.id, 0))
        .await
        .unwrap_err();

    assert_eq!(
        validation_reason(&err, "quantity").as_deref(),
        Some("Quantity must be at least 1")
    );

    Ok(())
}

/// Tests a waiter adding to a bill assigned to someone else.
///
/// Verifies that the bill is reported as missing rather than forbidden.
///
/// Expected: Err(AppError::Validation) with `bill_valid`
#[tokio::test]
async fn hides_other_waiters_bill() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, bill) = factory::helpers::create_bill_with_dependencies(db).await?;
    let other = factory::create_waiter(db).await?;
    let plate = factory::create_plate(db).await?;

    let err = BillService::new(db)
        .add_plate(BillAccess::OwnedBy(other.id), params(bill.id, plate.id, 1))
        .await
        .unwrap_err();

    assert_eq!(validation_reason(&err, "bill").as_deref(), Some("Bill not found"));

    Ok(())
}
