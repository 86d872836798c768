use super::*;

/// Tests creating a booking.
///
/// Verifies that new bookings start in the requested state without approval data.
///
/// Expected: Ok with status requested
#[tokio::test]
async fn creates_requested_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle) = factory::helpers::create_user_and_vehicle(db).await?;
    let start_time = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();

    let repo = BookingRepository::new(db);
    let booking = repo
        .create(CreateBookingParam {
            vehicle_id: vehicle.id,
            user_id: user.id,
            start_time,
            end_time: start_time + Duration::hours(8),
            purpose: "Kundentermin".to_string(),
            vehicle_size: "Kompakt".to_string(),
        })
        .await?;

    assert_eq!(booking.status, BookingStatus::Requested);
    assert_eq!(booking.start_time, start_time);
    assert!(booking.approved_by.is_none());
    assert!(booking.returned_at.is_none());

    Ok(())
}

/// Tests creating a booking for a vehicle that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let start_time = Utc::now();

    let repo = BookingRepository::new(db);
    let result = repo
        .create(CreateBookingParam {
            vehicle_id: 999,
            user_id: user.id,
            start_time,
            end_time: start_time + Duration::hours(1),
            purpose: String::new(),
            vehicle_size: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
