use super::*;

/// Tests creating a vehicle.
///
/// Verifies that all provided fields are persisted and no service dates are set.
///
/// Expected: Ok with matching fields
#[tokio::test]
async fn creates_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let vehicle = repo
        .create(
            CreateVehicleParam {
                model: "VW Golf".to_string(),
                license_plate: "B-FP 100".to_string(),
                image: Some("https://example.com/golf.jpg".to_string()),
                status: VehicleStatus::Available,
                odometer: 15000,
                fuel_level: 80,
                inspection_due: None,
                emissions_test_due: None,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(vehicle.model, "VW Golf");
    assert_eq!(vehicle.odometer, 15000);
    assert_eq!(vehicle.fuel_level, 80);
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert!(vehicle.last_service.is_none());

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
