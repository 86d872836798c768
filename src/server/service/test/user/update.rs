use super::*;

/// Tests changing the password of a user.
///
/// Expected: the stored hash matches the new password
#[tokio::test]
async fn rehashes_new_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                password: Some("neues-passwort".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(bcrypt::verify("neues-passwort", &updated.password_hash).unwrap());
    assert_eq!(updated.name, user.name);

    Ok(())
}

/// Tests moving a user to an email owned by someone else.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_email_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let service = UserService::new(db);
    let result = service
        .update(
            user.id,
            UpdateUserParam {
                email: Some(other.email),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let unchanged = service
        .update(
            user.id,
            UpdateUserParam {
                email: Some(user.email.clone()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(unchanged.email, user.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update(999, UpdateUserParam::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
