use super::*;

/// Tests opening a bill for an explicit waiter.
///
/// Verifies that the bill is `current` with a `CUE-` code and the table becomes occupied.
///
/// Expected: Ok(Bill)
#[tokio::test]
async fn opens_bill_and_occupies_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let waiter = factory::create_waiter(db).await?;
    let table = factory::create_table(db).await?;

    let bill = BillService::new(db)
        .create(CreateBillParams {
            table_id: table.id,
            waiter: WaiterAssignment::Explicit(waiter.id),
        })
        .await?;

    assert_eq!(bill.state, BillState::Current);
    assert_eq!(bill.waiter_id, Some(waiter.id));
    assert!(bill.code.starts_with("CUE-"));
    assert_eq!(bill.code.len(), 10);

    let table = TableRepository::new(db).find_by_id(table.id).await?.unwrap();
    assert_eq!(table.state, TableState::Occupied);

    Ok(())
}

/// Tests automatic waiter assignment.
///
/// Verifies that the waiter with no current bills is chosen over a busier one.
///
/// Expected: Ok(Bill) owned by the idle waiter
#[tokio::test]
async fn assigns_least_loaded_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (busy, _, _) = factory::helpers::create_bill_with_dependencies(db).await?;
    let idle = factory::create_waiter(db).await?;
    let table = factory::create_table(db).await?;

    let bill = BillService::new(db)
        .create(CreateBillParams {
            table_id: table.id,
            waiter: WaiterAssignment::LeastLoaded,
        })
        .await?;

    assert_eq!(bill.waiter_id, Some(idle.id));
    assert_ne!(bill.waiter_id, Some(busy.id));

    Ok(())
}

/// Tests a second bill on an occupied table.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_table_with_current_bill() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (waiter, table, _) = factory::helpers::create_bill_with_dependencies(db).await?;

    let result = BillService::new(db)
        .create(CreateBillParams {
            table_id: table.id,
            waiter: WaiterAssignment::Explicit(waiter.id),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests two simultaneous bill creations on the same table.
///
/// Verifies that exactly one attempt succeeds and the table ends up with one current bill.
///
/// Expected: one Ok, one Err(AppError::Conflict)
#[tokio::test]
async fn concurrent_creation_yields_single_bill() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let waiter = factory::create_waiter(db).await?;
    let table = factory::create_table(db).await?;
    let params = CreateBillParams {
        table_id: table.id,
        waiter: WaiterAssignment::Explicit(waiter.id),
    };

    let service = BillService::new(db);
    let (first, second) = tokio::join!(service.create(params), service.create(params));

    let successes = [first.is_ok(), second.is_ok()]
        .iter()
        .filter(|ok| **ok)
        .count();
    assert_eq!(successes, 1);
    assert!(matches!(
        (first, second),
        (Ok(_), Err(AppError::Conflict(_))) | (Err(AppError::Conflict(_)), Ok(_))
    ));

    let current = entity::prelude::Bill::find()
        .filter(entity::bill::Column::TableId.eq(table.id))
        .filter(entity::bill::Column::State.eq(BillState::Current))
        .count(db)
        .await?;
    assert_eq!(current, 1);

    Ok(())
}

/// Tests opening a bill on an unknown table.
///
/// Expected: Err(AppError::Validation) with `table_valid`
#[tokio::test]
async fn rejects_unknown_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let waiter = factory::create_waiter(db).await?;

    let err = BillService::new(db)
        .create(CreateBillParams {
            table_id: 999,
            waiter: WaiterAssignment::Explicit(waiter.id),
        })
        .await
        .unwrap_err();

    assert_eq!(validation_reason(&err, "table").as_deref(), Some("Table not found"));

    Ok(())
}

/// Tests choosing an account without the waiter role.
///
/// Expected: Err(AppError::Validation) with `waiter_valid`
#[tokio::test]
async fn rejects_non_waiter_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let table = factory::create_table(db).await?;

    let err = BillService::new(db)
        .create(CreateBillParams {
            table_id: table.id,
            waiter: WaiterAssignment::Explicit(client.id),
        })
        .await
        .unwrap_err();

    assert_eq!(validation_reason(&err, "waiter").as_deref(), Some("Waiter not found"));

    let table = TableRepository::new(db).find_by_id(table.id).await?.unwrap();
    assert_eq!(table.state, TableState::Available);

    Ok(())
}

/// Tests automatic assignment with no waiter on staff.
///
/// Expected: Err(AppError::NoWaitersAvailable)
#[tokio::test]
async fn fails_without_active_waiters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .waiter(true)
        .active(false)
        .build()
        .await?;
    let table = factory::create_table(db).await?;

    let result = BillService::new(db)
        .create(CreateBillParams {
            table_id: table.id,
            waiter: WaiterAssignment::LeastLoaded,
        })
        .await;

    assert!(matches!(result, Err(AppError::NoWaitersAvailable)));

    Ok(())
}

/// Tests inserting a bill whose code is already taken.
///
/// Verifies that a code clash is reported as a server fault rather than as the table
/// already having a bill.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn code_collision_is_not_a_table_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (waiter, _, existing) = factory::helpers::create_bill_with_dependencies(db).await?;
    let free_table = factory::create_table(db).await?;

    let err = BillRepository::new(db)
        .create(existing.code.clone(), free_table.id, Some(waiter.id))
        .await
        .map_err(bill_insert_error)
        .unwrap_err();

    assert!(matches!(err, AppError::InternalError(_)));

    Ok(())
}

/// Tests inserting a second current bill on a table with a fresh code.
///
/// Verifies that the current-bill index still surfaces as a table conflict.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn current_bill_index_is_a_table_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (waiter, table, _) = factory::helpers::create_bill_with_dependencies(db).await?;

    let err = BillRepository::new(db)
        .create("CUE-NEW001".to_string(), table.id, Some(waiter.id))
        .await
        .map_err(bill_insert_error)
        .unwrap_err();

    assert_eq!(err.to_string(), "Table already has an active bill");
    assert!(matches!(err, AppError::Conflict(_)));

    Ok(())
}
