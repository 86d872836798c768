use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::UserFactory::new(db)
        .name("Fuhrparkleitung")
        .admin()
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let principal = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(principal.name, "Fuhrparkleitung");
    assert!(principal.is_admin());

    Ok(())
}

/// Tests that stored flags do not grant the admin role.
///
/// An employee with every flag set may manage the fleet but not administer users.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_employee_with_all_flags() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::UserFactory::new(db)
        .permissions(serde_json::json!({
            "canBookVehicles": true,
            "canViewStatistics": true,
            "canManageVehicles": true,
            "canApproveRequests": true
        }))
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::ManageVehicles]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::Admin]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
