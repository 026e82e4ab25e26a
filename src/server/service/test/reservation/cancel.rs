use super::*;

/// Tests cancelling an active reservation.
///
/// Expected: Ok(Reservation) in the `cancelled` state
#[tokio::test]
async fn cancels_active_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::create_reservation(db).await?;

    let cancelled = ReservationService::new(db)
        .cancel(&ReservationLookup::Code(reservation.code))
        .await?;

    assert_eq!(cancelled.state, ReservationState::Cancelled);

    Ok(())
}

/// Tests cancelling a reservation twice.
///
/// Expected: Err(AppError::Validation) with `reservation_valid`
#[tokio::test]
async fn rejects_already_cancelled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::reservation::ReservationFactory::new(db)
        .state(ReservationState::Cancelled)
        .build()
        .await?;

    let err = ReservationService::new(db)
        .cancel(&ReservationLookup::Code(reservation.code))
        .await
        .unwrap_err();

    assert_eq!(
        validation_reason(&err, "reservation").as_deref(),
        Some("Reservation is already cancelled")
    );

    Ok(())
}

/// Tests cancelling a finalized reservation.
///
/// Verifies that the state is left unchanged.
///
/// Expected: Err(AppError::Validation) with `reservation_valid`
#[tokio::test]
async fn rejects_finalized() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::reservation::ReservationFactory::new(db)
        .state(ReservationState::Finalized)
        .build()
        .await?;

    let err = ReservationService::new(db)
        .cancel(&ReservationLookup::Code(reservation.code))
        .await
        .unwrap_err();

    assert_eq!(
        validation_reason(&err, "reservation").as_deref(),
        Some("Only active reservations can be cancelled")
    );

    let stored = ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?
        .unwrap();
    assert_eq!(stored.state, ReservationState::Finalized);

    Ok(())
}
