use super::*;

/// Tests that an employee may book but not view statistics.
///
/// Expected: Ok for BookVehicles, Err(AccessDenied) for ViewStatistics
#[tokio::test]
async fn applies_role_defaults() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::BookVehicles]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::ViewStatistics]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that stored flags override the role defaults.
///
/// Expected: Ok for ViewStatistics, Err(AccessDenied) for BookVehicles
#[tokio::test]
async fn applies_stored_flags() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::UserFactory::new(db)
        .permissions(serde_json::json!({
            "canBookVehicles": false,
            "canViewStatistics": true,
            "canManageVehicles": false,
            "canApproveRequests": false
        }))
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::ViewStatistics]).await.is_ok());
    assert!(guard.require(&[Permission::BookVehicles]).await.is_err());

    Ok(())
}

/// Tests that every listed permission must be granted.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn requires_all_listed_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::BookVehicles, Permission::ManageVehicles])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
