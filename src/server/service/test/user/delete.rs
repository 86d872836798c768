use super::*;

/// Tests deleting a user who still has bookings.
///
/// Expected: Err(AppError::Conflict) and the user is kept
#[tokio::test]
async fn refuses_user_with_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = UserService::new(db);
    let result = service.delete(user.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_by_id(user.id).await.is_ok());

    Ok(())
}

/// Tests deleting a user without bookings.
///
/// Expected: Ok(()) and the user is gone
#[tokio::test]
async fn deletes_user_without_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db);
    service.delete(user.id).await?;

    assert!(matches!(
        service.get_by_id(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
