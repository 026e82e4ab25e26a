use super::*;

/// Tests storing a review.
///
/// Verifies that both timestamps are stamped and the author is loaded.
///
/// Expected: Ok(Review) authored by the account
#[tokio::test]
async fn stores_review_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let review = ReviewRepository::new(db)
        .create(ReviewRecord {
            title: Some("Excelente".to_string()),
            score: Some(5),
            ..record(user.id, "Los tacos")
        })
        .await?;

    assert_eq!(review.author.id, user.id);
    assert_eq!(review.author.username, user.username);
    assert_eq!(review.title.as_deref(), Some("Excelente"));
    assert_eq!(review.score, Some(5));
    assert_eq!(review.created_at, review.updated_at);

    let repo = ReviewRepository::new(db);
    assert!(repo.exists_for_user(user.id).await?);

    Ok(())
}

/// Tests a second review by the same account.
///
/// Expected: Err(DbErr) from the unique user constraint
#[tokio::test]
async fn one_review_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_review(db, user.id).await?;

    let result = ReviewRepository::new(db)
        .create(record(user.id, "Otra vez"))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a review goes away with its account.
///
/// Expected: no review left after the user is deleted
#[tokio::test]
async fn review_is_removed_with_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_review(db, user.id).await?;

    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    assert!(!ReviewRepository::new(db).exists_for_user(user.id).await?);

    Ok(())
}
