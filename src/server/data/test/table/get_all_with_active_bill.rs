use super::*;

/// Tests attaching the current bill code to each table.
///
/// Verifies that only `current` bills are reported and tables are ordered by code.
///
/// Expected: Ok with the bill code on the occupied table only
#[tokio::test]
async fn attaches_current_bill_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::dining_table::create_table_with_code(db, "A1").await?;
    let free = factory::dining_table::create_table_with_code(db, "B1").await?;
    let bill = factory::bill::BillFactory::new(db, busy.id)
        .code("CUE-BUSY01")
        .build()
        .await?;
    factory::bill::BillFactory::new(db, free.id)
        .state(BillState::Closed)
        .build()
        .await?;

    let repo = TableRepository::new(db);
    let tables = repo.get_all_with_active_bill().await?;

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].0.id, busy.id);
    assert_eq!(tables[0].1.as_deref(), Some(bill.code.as_str()));
    assert_eq!(tables[1].0.id, free.id);
    assert_eq!(tables[1].1, None);

    Ok(())
}
