use super::*;

/// Tests selecting the waiters eligible for new bills.
///
/// Verifies that inactive waiters and non-waiter accounts are excluded.
///
/// Expected: Ok with only the active waiters, in id order
#[tokio::test]
async fn returns_only_active_waiters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let w1 = factory::create_waiter(db).await?;
    factory::user::UserFactory::new(db)
        .waiter(true)
        .active(false)
        .build()
        .await?;
    factory::user::create_admin(db).await?;
    let w2 = factory::create_waiter(db).await?;

    let repo = UserRepository::new(db);
    let ids = repo.get_active_waiter_ids().await?;

    assert_eq!(ids, vec![w1.id, w2.id]);

    Ok(())
}
