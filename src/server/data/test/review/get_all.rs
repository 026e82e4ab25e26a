use super::*;

/// Tests listing reviews.
///
/// Verifies that the newest review comes first and each carries its author.
///
/// Expected: Ok(Vec<Review>) ordered by creation time descending
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older_author = factory::create_user(db).await?;
    let newer_author = factory::create_user(db).await?;
    factory::review::ReviewFactory::new(db, older_author.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    factory::review::ReviewFactory::new(db, newer_author.id)
        .content("Muy rico")
        .build()
        .await?;

    let reviews = ReviewRepository::new(db).get_all().await?;

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].author.id, newer_author.id);
    assert_eq!(reviews[0].content, "Muy rico");
    assert_eq!(reviews[1].author.id, older_author.id);

    Ok(())
}
