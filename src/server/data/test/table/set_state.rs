use super::*;

/// Tests updating a table's occupancy.
///
/// Expected: Ok(true) and the new state stored
#[tokio::test]
async fn updates_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;

    let repo = TableRepository::new(db);
    let updated = repo.set_state(table.id, TableState::Occupied).await?;

    assert!(updated);
    let stored = repo.find_by_id(table.id).await?.unwrap();
    assert_eq!(stored.state, TableState::Occupied);

    Ok(())
}

/// Tests updating a missing table.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TableRepository::new(db);
    let updated = repo.set_state(999, TableState::Reserved).await?;

    assert!(!updated);

    Ok(())
}
