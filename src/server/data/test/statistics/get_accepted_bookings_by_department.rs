use super::*;

/// Tests grouping accepted bookings by the booking user's department.
///
/// Expected: Ok with counts per department and users without department grouped under None
#[tokio::test]
async fn groups_by_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let sales = factory::user::create_user_in_department(db, "Vertrieb").await?;
    let it = factory::user::create_user_in_department(db, "IT").await?;
    let nobody = factory::create_user(db).await?;

    let window = MonthWindow::containing(Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap());
    let start = window.start + Duration::days(1);

    for user_id in [sales.id, sales.id, it.id, nobody.id] {
        factory::BookingFactory::new(db, vehicle.id, user_id)
            .window(start, start + Duration::hours(1))
            .accepted()
            .build()
            .await?;
    }
    factory::BookingFactory::new(db, vehicle.id, it.id)
        .window(start, start + Duration::hours(1))
        .status("rejected")
        .build()
        .await?;

    let repo = StatisticsRepository::new(db);
    let mut counts = repo.get_accepted_bookings_by_department(&window).await?;
    counts.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        counts,
        vec![
            (None, 1),
            (Some("IT".to_string()), 1),
            (Some("Vertrieb".to_string()), 2),
        ]
    );

    Ok(())
}
