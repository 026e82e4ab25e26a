use super::*;

/// Tests deleting an area that still holds tables.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_area_in_use() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let area = factory::create_area(db).await?;
    factory::dining_table::DiningTableFactory::new(db)
        .area_id(Some(area.id))
        .build()
        .await?;

    let result = TableService::new(db).delete_area(area.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting an empty area.
///
/// Expected: Ok(())
#[tokio::test]
async fn deletes_empty_area() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let area = factory::create_area(db).await?;
    let service = TableService::new(db);

    service.delete_area(area.id).await?;

    assert!(service.get_areas().await?.is_empty());

    Ok(())
}
