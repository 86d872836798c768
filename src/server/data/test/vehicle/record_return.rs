use super::*;

/// Tests applying return readings to a booked vehicle.
///
/// Expected: Ok with new odometer and fuel level, status available
#[tokio::test]
async fn applies_readings_and_frees_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::VehicleFactory::new(db)
        .status("booked")
        .odometer(1000)
        .fuel_level(90)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    repo.record_return(vehicle.id, Some(1250), Some(40)).await?;
    let returned = repo.find_by_id(vehicle.id).await?.unwrap();

    assert_eq!(returned.odometer, 1250);
    assert_eq!(returned.fuel_level, 40);
    assert_eq!(returned.status, VehicleStatus::Available);

    Ok(())
}

/// Tests a return without readings.
///
/// Expected: Ok with the previous odometer and fuel level kept
#[tokio::test]
async fn keeps_readings_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::VehicleFactory::new(db)
        .status("booked")
        .odometer(1000)
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    repo.record_return(vehicle.id, None, None).await?;
    let returned = repo.find_by_id(vehicle.id).await?.unwrap();

    assert_eq!(returned.odometer, 1000);
    assert_eq!(returned.fuel_level, 100);

    Ok(())
}
