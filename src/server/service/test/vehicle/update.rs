use super::*;

/// Tests renaming the model of a vehicle.
///
/// Expected: the image is resolved again for the new model
#[tokio::test]
async fn re_resolves_image_for_new_model() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();

    let vehicle = factory::VehicleFactory::new(db)
        .model("VW Golf")
        .image("https://cdn.example.com/golf.jpg")
        .build()
        .await?;

    let updated = VehicleService::new(db, &images)
        .update(
            vehicle.id,
            UpdateVehicleParam {
                model: Some("Opel Astra".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.model, "Opel Astra");
    assert_eq!(
        updated.image.as_deref(),
        Some("https://dummyimage.com/600x400/000/fff&text=Opel+Astra")
    );

    Ok(())
}

/// Tests an update that leaves the model unchanged.
///
/// Expected: the stored image is kept
#[tokio::test]
async fn keeps_image_when_model_unchanged() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();

    let vehicle = factory::VehicleFactory::new(db)
        .model("VW Golf")
        .image("https://cdn.example.com/golf.jpg")
        .build()
        .await?;

    let updated = VehicleService::new(db, &images)
        .update(
            vehicle.id,
            UpdateVehicleParam {
                model: Some("VW Golf".to_string()),
                fuel_level: Some(40),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.image.as_deref(), Some("https://cdn.example.com/golf.jpg"));
    assert_eq!(updated.fuel_level, 40);

    Ok(())
}

/// Tests updating a vehicle that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();

    let result = VehicleService::new(db, &images)
        .update(42, UpdateVehicleParam::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests moving a vehicle onto the plate of another vehicle.
///
/// Expected: Err(AppError::Conflict) for the foreign plate, Ok when the plate is its own
#[tokio::test]
async fn rejects_plate_of_other_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();

    let golf = factory::VehicleFactory::new(db)
        .license_plate("B-FP 100")
        .image("https://cdn.example.com/golf.jpg")
        .build()
        .await?;
    factory::VehicleFactory::new(db)
        .license_plate("B-FP 101")
        .build()
        .await?;

    let service = VehicleService::new(db, &images);

    let result = service
        .update(
            golf.id,
            UpdateVehicleParam {
                license_plate: Some("B-FP 101".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let unchanged = service
        .update(
            golf.id,
            UpdateVehicleParam {
                license_plate: Some("B-FP 100".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(unchanged.license_plate, "B-FP 100");

    Ok(())
}
