use super::*;

/// Tests counting accepted bookings inside a month window.
///
/// Bookings that are not accepted, start before the window, or end after it are excluded.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_only_accepted_bookings_inside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle) = factory::helpers::create_user_and_vehicle(db).await?;
    let window = MonthWindow::containing(Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap());
    let inside = window.start + Duration::days(3);

    factory::BookingFactory::new(db, vehicle.id, user.id)
        .window(inside, inside + Duration::hours(4))
        .accepted()
        .build()
        .await?;
    factory::BookingFactory::new(db, vehicle.id, user.id)
        .window(inside, inside + Duration::hours(4))
        .status("requested")
        .build()
        .await?;
    factory::BookingFactory::new(db, vehicle.id, user.id)
        .window(window.start - Duration::hours(2), window.start + Duration::hours(2))
        .accepted()
        .build()
        .await?;
    factory::BookingFactory::new(db, vehicle.id, user.id)
        .window(window.end - Duration::hours(2), window.end + Duration::hours(2))
        .accepted()
        .build()
        .await?;

    let repo = StatisticsRepository::new(db);
    assert_eq!(repo.count_accepted_bookings(&window).await?, 1);
    assert_eq!(repo.count_accepted_bookings(&window.previous()).await?, 0);

    Ok(())
}
