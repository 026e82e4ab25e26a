use super::*;

/// Tests detecting a taken table code.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_taken_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::dining_table::create_table_with_code(db, "M1").await?;

    let repo = TableRepository::new(db);

    assert!(repo.code_exists("M1", None).await?);
    assert!(!repo.code_exists("M2", None).await?);

    Ok(())
}

/// Tests that a table does not conflict with its own code.
///
/// Verifies the `excluding` argument used when updating a table.
///
/// Expected: Ok(false) when excluding the owner, Ok(true) for another table
#[tokio::test]
async fn ignores_excluded_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::dining_table::create_table_with_code(db, "M1").await?;
    let other = factory::create_table(db).await?;

    let repo = TableRepository::new(db);

    assert!(!repo.code_exists("M1", Some(owner.id)).await?);
    assert!(repo.code_exists("M1", Some(other.id)).await?);

    Ok(())
}
