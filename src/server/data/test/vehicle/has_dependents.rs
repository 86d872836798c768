use super::*;

/// Tests a vehicle without any referencing rows.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unreferenced_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    assert!(!repo.has_dependents(vehicle.id).await?);

    Ok(())
}

/// Tests a vehicle referenced by a booking.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_with_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vehicle, _) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = VehicleRepository::new(db);
    assert!(repo.has_dependents(vehicle.id).await?);

    Ok(())
}

/// Tests a vehicle referenced only by a fuel log.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_with_fuel_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    factory::create_fuel_log(db, vehicle.id).await?;

    let repo = VehicleRepository::new(db);
    assert!(repo.has_dependents(vehicle.id).await?);

    Ok(())
}
