use super::*;

/// Tests accepting a booking.
///
/// Expected: Ok with status accepted and approver recorded
#[tokio::test]
async fn records_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let admin = factory::UserFactory::new(db).admin().build().await?;
    let decided_at = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();

    let repo = BookingRepository::new(db);
    let decided = repo
        .set_decision(booking.id, BookingStatus::Accepted, admin.id, decided_at)
        .await?;

    assert_eq!(decided.status, BookingStatus::Accepted);
    assert_eq!(decided.approved_by, Some(admin.id));
    assert_eq!(decided.approved_at, Some(decided_at));

    Ok(())
}
