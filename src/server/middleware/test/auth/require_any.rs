use super::*;

/// Tests a kitchen account against the kitchen endpoints' role set.
///
/// Expected: Ok(RequestContext)
#[tokio::test]
async fn grants_access_with_one_matching_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .kitchen(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let ctx = AuthGuard::new(db, session)
        .require_any(&[Permission::Kitchen, Permission::Admin])
        .await?;

    assert!(ctx.roles.kitchen);

    Ok(())
}

/// Tests a client account against the waiter endpoints' role set.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_client_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require_any(&[Permission::Waiter, Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests which bills a waiter and an admin may act on.
///
/// Expected: `OwnedBy` for the waiter and `All` for the admin
#[tokio::test]
async fn bill_access_follows_admin_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let waiter = factory::create_waiter(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let guard = AuthGuard::new(db, session);

    AuthSession::new(session).set_user_id(waiter.id).await?;
    let ctx = guard
        .require_any(&[Permission::Waiter, Permission::Admin])
        .await?;
    assert_eq!(ctx.bill_access(), BillAccess::OwnedBy(waiter.id));

    AuthSession::new(session).set_user_id(admin.id).await?;
    let ctx = guard
        .require_any(&[Permission::Waiter, Permission::Admin])
        .await?;
    assert_eq!(ctx.bill_access(), BillAccess::All);

    Ok(())
}
