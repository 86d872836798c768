use super::*;

/// Tests deleting a record.
///
/// Expected: record gone, audit entry with the old snapshot only
#[tokio::test]
async fn deletes_and_keeps_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle) = factory::helpers::create_user_and_vehicle(db).await?;
    let record = factory::create_maintenance_record(db, vehicle.id).await?;

    let service = MaintenanceService::new(db);
    service.delete(record.id, &principal(user)).await?;

    assert!(service.get_by_vehicle(vehicle.id).await?.is_empty());

    let (entries, _) = AuditLogRepository::new(db)
        .get_paginated(&audit_page(vehicle.id))
        .await?;
    assert_eq!(entries[0].action, "maintenance_deleted");
    assert!(entries[0].old_values.is_some());
    assert!(entries[0].new_values.is_none());

    Ok(())
}
