use super::*;

/// Tests creating a vehicle without image.
///
/// Expected: the placeholder image for the model
#[tokio::test]
async fn resolves_placeholder_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();

    let vehicle = VehicleService::new(db, &images)
        .create(create_param("VW Golf", "B-FP 100"))
        .await?;

    assert_eq!(
        vehicle.image.as_deref(),
        Some("https://dummyimage.com/600x400/000/fff&text=VW+Golf")
    );
    assert_eq!(vehicle.status, VehicleStatus::Available);

    Ok(())
}

/// Tests creating a vehicle with an explicit image.
///
/// Expected: the given image is stored unchanged
#[tokio::test]
async fn keeps_explicit_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();

    let mut param = create_param("BMW 320d", "M-FP 200");
    param.image = Some("https://cdn.example.com/bmw.jpg".to_string());

    let vehicle = VehicleService::new(db, &images).create(param).await?;

    assert_eq!(vehicle.image.as_deref(), Some("https://cdn.example.com/bmw.jpg"));

    Ok(())
}

/// Tests registering a second vehicle under a plate that is already in use.
///
/// Expected: Err(AppError::Conflict), only the first vehicle stored
#[tokio::test]
async fn rejects_duplicate_license_plate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();
    let service = VehicleService::new(db, &images);

    service.create(create_param("VW Golf", "B-FP 100")).await?;
    let result = service.create(create_param("VW Passat", "B-FP 100")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}
