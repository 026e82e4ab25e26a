use super::*;

/// Tests seating an active reservation.
///
/// Expected: Ok(true), state in_course and the table recorded
#[tokio::test]
async fn seats_active_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reservation = factory::create_reservation(db).await?;
    let table = factory::create_table(db).await?;

    let repo = ReservationRepository::new(db);
    let assigned = repo.assign_table_if_active(reservation.id, table.id).await?;

    assert!(assigned);
    let stored = repo.find_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.state, ReservationState::InCourse);
    assert_eq!(stored.table_id, Some(table.id));

    Ok(())
}

/// Tests that a cancelled reservation cannot be seated.
///
/// Expected: Ok(false) and no table recorded
#[tokio::test]
async fn skips_cancelled_reservation() -> Result<(), DbErr> {
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
    let table = factory::create_table(db).await?;

    let repo = ReservationRepository::new(db);
    let assigned = repo.assign_table_if_active(reservation.id, table.id).await?;

    assert!(!assigned);
    let stored = repo.find_by_id(reservation.id).await?.unwrap();
    assert_eq!(stored.table_id, None);

    Ok(())
}
