use super::*;

/// Tests that employees only see their own bookings while admins see all.
///
/// Expected: 1 booking for the employee, 2 for the admin
#[tokio::test]
async fn limits_employees_to_own_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (employee, vehicle) = factory::helpers::create_user_and_vehicle(db).await?;
    let colleague = factory::create_user(db).await?;
    let admin = factory::UserFactory::new(db).admin().build().await?;

    factory::create_booking(db, vehicle.id, employee.id).await?;
    factory::create_booking(db, vehicle.id, colleague.id).await?;

    let service = BookingService::new(db);
    let own = service.get_all(&principal(employee.clone())).await?;
    let all = service.get_all(&principal(admin)).await?;

    assert_eq!(own.len(), 1);
    assert_eq!(own[0].user_id, employee.id);
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests reading a colleague's booking as employee.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_foreign_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .get_by_id(booking.id, &principal(stranger))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
