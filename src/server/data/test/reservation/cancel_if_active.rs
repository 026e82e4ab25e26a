use super::*;

/// Tests cancelling an active reservation.
///
/// Expected: Ok(true) and state cancelled
#[tokio::test]
async fn cancels_active_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::create_reservation(db).await?;

    let repo = ReservationRepository::new(db);
    let cancelled = repo.cancel_if_active(reservation.id).await?;

    assert!(cancelled);
    let stored = repo.find_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.state, ReservationState::Cancelled);

    Ok(())
}

/// Tests that only active reservations can be cancelled.
///
/// Verifies that seated and finalized reservations keep their state.
///
/// Expected: Ok(false) for each
#[tokio::test]
async fn leaves_non_active_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReservationRepository::new(db);

    for state in [
        ReservationState::InCourse,
        ReservationState::Finalized,
        ReservationState::Cancelled,
    ] {
        let reservation = factory::reservation::ReservationFactory::new(db)
            .state(state)
            .build()
            .await?;

        assert!(!repo.cancel_if_active(reservation.id).await?);
        let stored = repo.find_by_id(reservation.id).await?.unwrap();
        assert_eq!(stored.state, state);
    }

    Ok(())
}
