use super::*;

/// Tests recording an inspection.
///
/// Expected: vehicle odometer and last service follow the record, one audit entry written
#[tokio::test]
async fn syncs_vehicle_and_writes_audit_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle) = factory::helpers::create_user_and_vehicle(db).await?;
    let date = Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();

    let record = MaintenanceService::new(db)
        .create(
            vehicle.id,
            MaintenanceRecordParam {
                date,
                description: "Hauptuntersuchung".to_string(),
                cost: 120.0,
                odometer: Some(30500),
                performed_by: Some("TÜV Süd".to_string()),
                kind: Some(MaintenanceKind::Inspection),
            },
            &principal(user.clone()),
        )
        .await?;

    assert_eq!(record.kind, Some(MaintenanceKind::Inspection));

    let vehicle = VehicleRepository::new(db).find_by_id(vehicle.id).await?.unwrap();
    assert_eq!(vehicle.odometer, 30500);
    assert_eq!(vehicle.last_service, Some(date));

    let (entries, total) = AuditLogRepository::new(db)
        .get_paginated(&audit_page(vehicle.id))
        .await?;
    assert_eq!(total, 1);
    assert_eq!(entries[0].action, "maintenance_created");
    assert_eq!(entries[0].actor.as_deref(), Some(user.name.as_str()));
    assert!(entries[0].old_values.is_none());
    assert!(entries[0]
        .new_values
        .as_deref()
        .unwrap()
        .contains("Hauptuntersuchung"));

    Ok(())
}

/// Tests a record for a vehicle that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = MaintenanceService::new(db)
        .create(
            404,
            MaintenanceRecordParam {
                date: Utc::now(),
                description: "Ölwechsel".to_string(),
                cost: 0.0,
                odometer: None,
                performed_by: None,
                kind: None,
            },
            &principal(user),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a record whose audit entry cannot be written.
///
/// The audit log table is missing, so the last write of the transaction fails.
///
/// Expected: Err, no maintenance record stored and the vehicle left untouched
#[tokio::test]
async fn rolls_back_when_audit_entry_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Vehicle)
        .with_table(entity::prelude::MaintenanceRecord)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::VehicleFactory::new(db).odometer(15000).build().await?;

    let result = MaintenanceService::new(db)
        .create(
            vehicle.id,
            MaintenanceRecordParam {
                date: Utc.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap(),
                description: "Ölwechsel".to_string(),
                cost: 89.0,
                odometer: Some(30500),
                performed_by: None,
                kind: Some(MaintenanceKind::Routine),
            },
            &principal(user),
        )
        .await;

    assert!(result.is_err());

    let records = MaintenanceRecordRepository::new(db)
        .get_by_vehicle(vehicle.id)
        .await?;
    assert!(records.is_empty());

    let vehicle = VehicleRepository::new(db).find_by_id(vehicle.id).await?.unwrap();
    assert_eq!(vehicle.odometer, 15000);
    assert!(vehicle.last_service.is_none());

    Ok(())
}
