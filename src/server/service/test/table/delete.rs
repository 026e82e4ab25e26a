use super::*;

/// Tests deleting a table that has a current bill.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_table_with_active_bill() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, table, _) = factory::helpers::create_bill_with_dependencies(db).await?;

    let result = TableService::new(db).delete(table.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting a free table.
///
/// Expected: Ok(()), then Err(AppError::NotFound) on a second attempt
#[tokio::test]
async fn deletes_free_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let table = factory::create_table(db).await?;
    let service = TableService::new(db);

    service.delete(table.id).await?;
    let result = service.delete(table.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
