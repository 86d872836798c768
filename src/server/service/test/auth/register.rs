use super::*;

/// Tests registering a new employee.
///
/// Expected: Ok(User) with a bcrypt hash instead of the plain password
#[tokio::test]
async fn registers_employee_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AuthService::new(db)
        .register(register_param("erika@example.com"))
        .await?;

    assert_eq!(user.role, Role::Employee);
    assert_ne!(user.password_hash, "geheim123");
    assert!(bcrypt::verify("geheim123", &user.password_hash).unwrap());

    Ok(())
}

/// Tests registering an email that is already taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::UserFactory::new(db)
        .email("erika@example.com")
        .build()
        .await?;

    let result = AuthService::new(db)
        .register(register_param("erika@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
