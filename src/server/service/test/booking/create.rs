use super::*;

/// Tests requesting a booking for oneself.
///
/// Expected: Ok(Booking) in the requested state
#[tokio::test]
async fn creates_requested_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle) = factory::helpers::create_user_and_vehicle(db).await?;
    let start = Utc::now() + Duration::days(1);

    let booking = BookingService::new(db)
        .create(
            CreateBookingParam {
                vehicle_id: vehicle.id,
                user_id: user.id,
                start_time: start,
                end_time: start + Duration::hours(8),
                purpose: "Kundentermin".to_string(),
                vehicle_size: "klein".to_string(),
            },
            &principal(user),
        )
        .await?;

    assert_eq!(booking.status, BookingStatus::Requested);
    assert!(booking.approved_by.is_none());

    Ok(())
}

/// Tests an employee booking on behalf of another user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_booking_for_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle) = factory::helpers::create_user_and_vehicle(db).await?;
    let other = factory::create_user(db).await?;
    let start = Utc::now();

    let result = BookingService::new(db)
        .create(
            CreateBookingParam {
                vehicle_id: vehicle.id,
                user_id: other.id,
                start_time: start,
                end_time: start + Duration::hours(1),
                purpose: String::new(),
                vehicle_size: String::new(),
            },
            &principal(user),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests booking a vehicle that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let start = Utc::now();

    let result = BookingService::new(db)
        .create(
            CreateBookingParam {
                vehicle_id: 999,
                user_id: user.id,
                start_time: start,
                end_time: start + Duration::hours(1),
                purpose: String::new(),
                vehicle_size: String::new(),
            },
            &principal(user),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
