use super::*;

/// Tests creating a staff account.
///
/// Verifies that roles are kept and the password is stored hashed.
///
/// Expected: Ok(User)
#[tokio::test]
async fn creates_account_with_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(params("lperez", "luis@example.com"))
        .await?;

    assert!(user.roles.waiter);
    assert!(!user.roles.admin);
    assert!(user.is_active);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "s3cure-pass");
    assert!(stored.password_hash.starts_with("$argon2"));

    Ok(())
}

/// Tests creating an account whose username and email are taken.
///
/// Expected: Err(AppError::Validation) with `username_valid` and `email_valid`
#[tokio::test]
async fn rejects_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let result = UserService::new(db)
        .create(params(&existing.username, &existing.email))
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors.reason("username"), Some("Username is already taken"));
            assert_eq!(errors.reason("email"), Some("Email is already registered"));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }

    Ok(())
}

/// Tests creating an account with invalid fields.
///
/// Expected: Err(AppError::Validation) naming each field
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_restaurant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .create(CreateUserParams {
            name: "  ".to_string(),
            password: "short".to_string(),
            ..params("", "nope")
        })
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors.reason("username"), Some("Username is required"));
            assert_eq!(errors.reason("name"), Some("Name is required"));
            assert_eq!(errors.reason("email"), Some("Email is not valid"));
            assert_eq!(
                errors.reason("password"),
                Some("Password must be at least 8 characters")
            );
        }
        other => panic!("Expected validation error, got {:?}", other),
    }

    Ok(())
}
