use super::*;

/// Tests listing bookings filtered by user.
///
/// Expected: Ok with only the given user's bookings, latest start first
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle) = factory::helpers::create_user_and_vehicle(db).await?;
    let other = factory::create_user(db).await?;
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();

    let early = factory::BookingFactory::new(db, vehicle.id, user.id)
        .window(start, start + Duration::hours(2))
        .build()
        .await?;
    let late = factory::BookingFactory::new(db, vehicle.id, user.id)
        .window(start + Duration::days(1), start + Duration::days(1) + Duration::hours(2))
        .build()
        .await?;
    factory::create_booking(db, vehicle.id, other.id).await?;

    let repo = BookingRepository::new(db);
    let own = repo.get_all(Some(user.id)).await?;
    let all = repo.get_all(None).await?;

    assert_eq!(own.iter().map(|b| b.id).collect::<Vec<_>>(), vec![late.id, early.id]);
    assert_eq!(all.len(), 3);

    Ok(())
}
