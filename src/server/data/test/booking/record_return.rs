use super::*;

/// Tests storing return data on a booking.
///
/// Expected: Ok with readings, notes and return time set
#[tokio::test]
async fn stores_return_data() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let returned_at = Utc::now();

    let repo = BookingRepository::new(db);
    let returned = repo
        .record_return(
            booking.id,
            &ReturnBookingParam {
                end_odometer: Some(1500),
                end_fuel_level: Some(55),
                damages: None,
                notes: Some("Scheibenwischer quietscht".to_string()),
            },
            returned_at,
        )
        .await?;

    assert_eq!(returned.end_odometer, Some(1500));
    assert_eq!(returned.end_fuel_level, Some(55));
    assert_eq!(returned.return_notes.as_deref(), Some("Scheibenwischer quietscht"));
    assert_eq!(returned.returned_at, Some(returned_at));

    Ok(())
}
