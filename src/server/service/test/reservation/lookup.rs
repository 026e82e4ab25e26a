use super::*;

/// Tests looking up by email when the contact has an active and a cancelled reservation.
///
/// Verifies that the active one wins even though the cancelled one is newer.
///
/// Expected: Ok(Reservation) in the `active` state
#[tokio::test]
async fn prefers_active_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let email = "lookup@example.com".to_string();
    let active = factory::reservation::ReservationFactory::new(db)
        .email(Some(email.clone()))
        .date_time(Utc::now() + Duration::days(1))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db)
        .email(Some(email.clone()))
        .date_time(Utc::now() + Duration::days(3))
        .state(ReservationState::Cancelled)
        .build()
        .await?;

    let found = ReservationService::new(db)
        .lookup(&ReservationLookup::Email(email))
        .await?;

    assert_eq!(found.id, active.id);

    Ok(())
}

/// Tests looking up a contact with no active reservation.
///
/// Expected: Ok(Reservation) falling back to the most recent one
#[tokio::test]
async fn falls_back_to_latest_in_any_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let phone = "5599990000".to_string();
    let finalized = factory::reservation::ReservationFactory::new(db)
        .phone_number(Some(phone.clone()))
        .state(ReservationState::Finalized)
        .build()
        .await?;

    let found = ReservationService::new(db)
        .lookup(&ReservationLookup::PhoneNumber(phone))
        .await?;

    assert_eq!(found.id, finalized.id);

    Ok(())
}

/// Tests looking up an unknown code.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_code_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReservationService::new(db)
        .lookup(&ReservationLookup::Code("RES-ZZZZZZ".to_string()))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
