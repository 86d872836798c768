use super::*;
use test_utils::factory::user::DEFAULT_PASSWORD;

/// Tests logging in with the correct password.
///
/// Expected: Ok(User) for the matching account
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::UserFactory::new(db)
        .email("max@example.com")
        .build()
        .await?;

    let principal = AuthService::new(db)
        .login("max@example.com", DEFAULT_PASSWORD)
        .await?;

    assert_eq!(principal.id, user.id);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::UserFactory::new(db)
        .email("max@example.com")
        .build()
        .await?;

    let result = AuthService::new(db)
        .login("max@example.com", "falsch")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login("niemand@example.com", DEFAULT_PASSWORD)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
