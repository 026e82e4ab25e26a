use super::*;

/// Creates a current bill of 100.00 on an occupied table with one seated reservation.
async fn seated_bill(
    db: &sea_orm::DatabaseConnection,
) -> Result<(entity::bill::Model, i32, i32), AppError> {
    let waiter = factory::create_waiter(db).await?;
    let table = factory::dining_table::DiningTableFactory::new(db)
        .state(TableState::Occupied)
        .build()
        .await?;
    let bill = factory::bill::BillFactory::new(db, table.id)
        .waiter_id(Some(waiter.id))
        .total(100.0)
        .build()
        .await?;
    let reservation = factory::reservation::ReservationFactory::new(db)
        .state(ReservationState::InCourse)
        .table_id(Some(table.id))
        .build()
        .await?;

    Ok((bill, table.id, reservation.id))
}

fn params(bill_id: i32, amount_paid: f64, tip_percentage: f64) -> FinalizeBillParams {
    FinalizeBillParams {
        bill_id,
        amount_paid,
        tip_percentage,
    }
}

/// Tests paying one cent short of total plus tip.
///
/// Verifies that the bill stays current and the table stays occupied.
///
/// Expected: Err(AppError::Validation) with `amount_sufficient_valid`
#[tokio::test]
async fn rejects_payment_below_total_plus_tip() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (bill, table_id, _) = seated_bill(db).await?;

    let err = BillService::new(db)
        .finalize(BillAccess::All, params(bill.id, 109.99, 10.0))
        .await
        .unwrap_err();

    assert_eq!(
        validation_reason(&err, "amount_sufficient").as_deref(),
        Some("Amount paid must be at least $110.00 MXN")
    );

    let bill = BillRepository::new(db).find_by_id(bill.id).await?.unwrap();
    assert_eq!(bill.state, BillState::Current);
    let table = TableRepository::new(db).find_by_id(table_id).await?.unwrap();
    assert_eq!(table.state, TableState::Occupied);

    Ok(())
}

/// Tests paying exactly total plus tip.
///
/// Verifies that the bill closes with the payment and tip stored, the table is freed and
/// the seated reservation is finalized.
///
/// Expected: Ok(Bill) in the `closed` state
#[tokio::test]
async fn closes_bill_and_frees_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (bill, table_id, reservation_id) = seated_bill(db).await?;

    let bill = BillService::new(db)
        .finalize(BillAccess::All, params(bill.id, 110.00, 10.0))
        .await?;

    assert_eq!(bill.state, BillState::Closed);
    assert_eq!(bill.total_paid, 110.00);
    assert_eq!(bill.tip, 10);

    let table = TableRepository::new(db).find_by_id(table_id).await?.unwrap();
    assert_eq!(table.state, TableState::Available);

    let reservation = ReservationRepository::new(db)
        .find_by_id(reservation_id)
        .await?
        .unwrap();
    assert_eq!(reservation.state, ReservationState::Finalized);

    Ok(())
}

/// Tests finalizing a bill twice.
///
/// Expected: Err(AppError::Validation) with `bill_valid`
#[tokio::test]
async fn rejects_already_closed_bill() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (bill, _, _) = seated_bill(db).await?;
    let service = BillService::new(db);

    service
        .finalize(BillAccess::All, params(bill.id, 100.0, 0.0))
        .await?;
    let err = service
        .finalize(BillAccess::All, params(bill.id, 100.0, 0.0))
        .await
        .unwrap_err();

    assert_eq!(
        validation_reason(&err, "bill").as_deref(),
        Some("Bill is already closed")
    );

    Ok(())
}

/// Tests out-of-range payment inputs.
///
/// Expected: Err(AppError::Validation) for a negative payment and for a tip above 100
#[tokio::test]
async fn rejects_invalid_amounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (bill, _, _) = seated_bill(db).await?;
    let service = BillService::new(db);

    let err = service
        .finalize(BillAccess::All, params(bill.id, -1.0, 0.0))
        .await
        .unwrap_err();
    assert!(validation_reason(&err, "amount_paid").is_some());

    let err = service
        .finalize(BillAccess::All, params(bill.id, 500.0, 150.0))
        .await
        .unwrap_err();
    assert!(validation_reason(&err, "tip_percentage").is_some());

    Ok(())
}

/// Tests a waiter finalizing a bill they own.
///
/// Expected: Ok(Bill)
#[tokio::test]
async fn owner_can_finalize() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (bill, _, _) = seated_bill(db).await?;
    let waiter_id = bill.waiter_id.unwrap();

    let bill = BillService::new(db)
        .finalize(BillAccess::OwnedBy(waiter_id), params(bill.id, 120.0, 15.0))
        .await?;

    assert_eq!(bill.tip, 15);

    Ok(())
}

/// Tests a payment that falls short by a fraction of a cent.
///
/// Verifies that 38.326 does not cover 33.33 plus a 15% tip (38.3295), and that the
/// required amount is quoted rounded up to 38.33.
///
/// Expected: Err(AppError::Validation) with `amount_sufficient_valid`
#[tokio::test]
async fn rejects_sub_cent_underpayment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;
    let bill = factory::bill::BillFactory::new(db, table.id)
        .total(33.33)
        .build()
        .await?;
    let service = BillService::new(db);

    let err = service
        .finalize(BillAccess::All, params(bill.id, 38.326, 15.0))
        .await
        .unwrap_err();
    assert_eq!(
        validation_reason(&err, "amount_sufficient").as_deref(),
        Some("Amount paid must be at least $38.33 MXN")
    );

    let bill = service
        .finalize(BillAccess::All, params(bill.id, 38.33, 15.0))
        .await?;
    assert_eq!(bill.state, BillState::Closed);

    Ok(())
}

/// Tests finalizing a bill on a table where two reservations are seated.
///
/// Verifies that every `in_course` reservation on the table is finalized, not only the one
/// that opened the bill, while a reservation seated elsewhere is untouched.
///
/// Expected: Ok(Bill) with both reservations `finalized`
#[tokio::test]
async fn finalizes_every_seated_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (bill, table_id, first) = seated_bill(db).await?;
    let second = factory::reservation::ReservationFactory::new(db)
        .state(ReservationState::InCourse)
        .table_id(Some(table_id))
        .build()
        .await?;
    let elsewhere_table = factory::create_table(db).await?;
    let elsewhere = factory::reservation::ReservationFactory::new(db)
        .state(ReservationState::InCourse)
        .table_id(Some(elsewhere_table.id))
        .build()
        .await?;

    BillService::new(db)
        .finalize(BillAccess::All, params(bill.id, 110.00, 10.0))
        .await?;

    let reservation_repo = ReservationRepository::new(db);
    for id in [first, second.id] {
        let reservation = reservation_repo.find_by_id(id).await?.unwrap();
        assert_eq!(reservation.state, ReservationState::Finalized);
    }
    let untouched = reservation_repo.find_by_id(elsewhere.id).await?.unwrap();
    assert_eq!(untouched.state, ReservationState::InCourse);

    let finalized = entity::prelude::Reservation::find()
        .filter(entity::reservation::Column::State.eq(ReservationState::Finalized))
        .count(db)
        .await?;
    assert_eq!(finalized, 2);

    Ok(())
}
