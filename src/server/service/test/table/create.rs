use super::*;

/// Tests creating a table.
///
/// Expected: Ok(Table) in the `available` state
#[tokio::test]
async fn creates_available_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let area = factory::create_area(db).await?;

    let table = TableService::new(db)
        .create(CreateTableParams {
            code: " T-10 ".to_string(),
            capacity: 4,
            area_id: Some(area.id),
            notes: None,
        })
        .await?;

    assert_eq!(table.code, "T-10");
    assert_eq!(table.state, TableState::Available);
    assert_eq!(table.area_id, Some(area.id));

    Ok(())
}

/// Tests creating a table with a taken code and zero capacity.
///
/// Expected: Err(AppError::Validation) with `code_valid` and `capacity_valid`
#[tokio::test]
async fn rejects_duplicate_code_and_bad_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::dining_table::create_table_with_code(db, "T-11").await?;

    let result = TableService::new(db)
        .create(CreateTableParams {
            code: "T-11".to_string(),
            capacity: 0,
            area_id: None,
            notes: None,
        })
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(
                errors.reason("code"),
                Some("A table with this code already exists")
            );
            assert_eq!(errors.reason("capacity"), Some("Capacity must be greater than 0"));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }

    Ok(())
}
