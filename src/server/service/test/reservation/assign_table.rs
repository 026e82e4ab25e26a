use super::*;

/// Tests seating a reservation for today at a free table.
///
/// Verifies that the reservation moves to `in_course`, the table is occupied and a current
/// bill is opened on it for an active waiter.
///
/// Expected: Ok(Reservation)
#[tokio::test]
async fn seats_reservation_and_opens_bill() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let waiter = factory::create_waiter(db).await?;
    let table = factory::dining_table::create_table_with_code(db, "M-07").await?;
    let reservation = factory::reservation::ReservationFactory::new(db)
        .date_time(now)
        .build()
        .await?;

    let seated = ReservationService::new(db)
        .assign_table(reservation.id, "M-07", now)
        .await?;

    assert_eq!(seated.state, ReservationState::InCourse);
    assert_eq!(seated.table_id, Some(table.id));

    let table = TableRepository::new(db).find_by_id(table.id).await?.unwrap();
    assert_eq!(table.state, TableState::Occupied);

    let bill = entity::prelude::Bill::find()
        .filter(entity::bill::Column::TableId.eq(table.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(bill.state, BillState::Current);
    assert_eq!(bill.waiter_id, Some(waiter.id));

    Ok(())
}

/// Tests seating a reservation booked for another day.
///
/// Expected: Err(AppError::Validation) with `reservation_valid`
#[tokio::test]
async fn rejects_reservation_not_for_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_waiter(db).await?;
    factory::dining_table::create_table_with_code(db, "M-08").await?;
    let reservation = factory::reservation::ReservationFactory::new(db)
        .date_time(now + Duration::days(2))
        .build()
        .await?;

    let err = ReservationService::new(db)
        .assign_table(reservation.id, "M-08", now)
        .await
        .unwrap_err();

    assert_eq!(
        validation_reason(&err, "reservation").as_deref(),
        Some("Reservation is not for today")
    );

    Ok(())
}

/// Tests seating at a table that is already occupied.
///
/// Verifies that the reservation stays `active` without a table.
///
/// Expected: Err(AppError::Validation) with `table_code_valid`
#[tokio::test]
async fn rejects_occupied_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_waiter(db).await?;
    factory::dining_table::DiningTableFactory::new(db)
        .code("T-01")
        .state(TableState::Occupied)
        .build()
        .await?;
    let reservation = factory::reservation::ReservationFactory::new(db)
        .date_time(now)
        .build()
        .await?;

    let err = ReservationService::new(db)
        .assign_table(reservation.id, "T-01", now)
        .await
        .unwrap_err();

    assert_eq!(
        validation_reason(&err, "table_code").as_deref(),
        Some("Table is not available (current state: occupied)")
    );

    let stored = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.state, ReservationState::Active);
    assert_eq!(stored.table_id, None);

    Ok(())
}

/// Tests seating with an unknown or blank table code.
///
/// Expected: Err(AppError::Validation) with `table_code_valid`
#[tokio::test]
async fn rejects_unknown_table_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let reservation = factory::reservation::ReservationFactory::new(db)
        .date_time(now)
        .build()
        .await?;
    let service = ReservationService::new(db);

    let err = service
        .assign_table(reservation.id, "NOPE", now)
        .await
        .unwrap_err();
    assert_eq!(
        validation_reason(&err, "table_code").as_deref(),
        Some("Table not found")
    );

    let err = service
        .assign_table(reservation.id, "  ", now)
        .await
        .unwrap_err();
    assert_eq!(
        validation_reason(&err, "table_code").as_deref(),
        Some("Table code is required")
    );

    Ok(())
}

/// Tests seating when no waiter is on staff.
///
/// Verifies that the whole seating is rolled back.
///
/// Expected: Err(AppError::NoWaitersAvailable)
#[tokio::test]
async fn rolls_back_without_waiters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let table = factory::dining_table::create_table_with_code(db, "M-09").await?;
    let reservation = factory::reservation::ReservationFactory::new(db)
        .date_time(now)
        .build()
        .await?;

    let result = ReservationService::new(db)
        .assign_table(reservation.id, "M-09", now)
        .await;

    assert!(matches!(result, Err(AppError::NoWaitersAvailable)));

    let table = TableRepository::new(db).find_by_id(table.id).await?.unwrap();
    assert_eq!(table.state, TableState::Available);
    let stored = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.state, ReservationState::Active);

    Ok(())
}
