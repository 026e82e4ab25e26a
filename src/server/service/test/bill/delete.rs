use super::*;

/// Tests deleting a current bill.
///
/// Verifies that the table is freed and the seated reservation goes back to `active`
/// without a table.
///
/// Expected: Ok(())
#[tokio::test]
async fn releases_table_and_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::dining_table::DiningTableFactory::new(db)
        .state(TableState::Occupied)
        .build()
        .await?;
    let bill = factory::create_bill(db, table.id).await?;
    let reservation = factory::reservation::ReservationFactory::new(db)
        .state(ReservationState::InCourse)
        .table_id(Some(table.id))
        .build()
        .await?;

    BillService::new(db).delete(bill.id).await?;

    assert!(BillRepository::new(db).find_by_id(bill.id).await?.is_none());

    let table = TableRepository::new(db).find_by_id(table.id).await?.unwrap();
    assert_eq!(table.state, TableState::Available);

    let reservation = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(reservation.state, ReservationState::Active);
    assert_eq!(reservation.table_id, None);

    Ok(())
}

/// Tests deleting a closed bill.
///
/// Verifies that the table state is left alone.
///
/// Expected: Ok(())
#[tokio::test]
async fn closed_bill_leaves_table_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::dining_table::DiningTableFactory::new(db)
        .state(TableState::Occupied)
        .build()
        .await?;
    let bill = factory::bill::BillFactory::new(db, table.id)
        .state(BillState::Closed)
        .build()
        .await?;

    BillService::new(db).delete(bill.id).await?;

    let table = TableRepository::new(db).find_by_id(table.id).await?.unwrap();
    assert_eq!(table.state, TableState::Occupied);

    Ok(())
}

/// Tests deleting an unknown bill.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_bill() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BillService::new(db).delete(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
