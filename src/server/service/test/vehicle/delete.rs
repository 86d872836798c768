use super::*;

/// Tests deleting a vehicle that still has a fuel log.
///
/// Expected: Err(AppError::Conflict) and the vehicle is kept
#[tokio::test]
async fn refuses_vehicle_with_dependents() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();

    let vehicle = factory::create_vehicle(db).await?;
    factory::create_fuel_log(db, vehicle.id).await?;

    let service = VehicleService::new(db, &images);
    let result = service.delete(vehicle.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_by_id(vehicle.id).await.is_ok());

    Ok(())
}

/// Tests deleting an unreferenced vehicle.
///
/// Expected: Ok(()) and the vehicle is gone
#[tokio::test]
async fn deletes_unreferenced_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();

    let vehicle = factory::create_vehicle(db).await?;

    let service = VehicleService::new(db, &images);
    service.delete(vehicle.id).await?;

    assert!(matches!(
        service.get_by_id(vehicle.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
