use super::*;

/// Tests listing the maintenance history of one vehicle.
///
/// Expected: Ok with that vehicle's records, newest first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let other = factory::create_vehicle(db).await?;
    let now = Utc::now();

    let old = factory::MaintenanceRecordFactory::new(db, vehicle.id)
        .date(now - Duration::days(30))
        .build()
        .await?;
    let recent = factory::MaintenanceRecordFactory::new(db, vehicle.id)
        .date(now)
        .kind("Inspektion")
        .build()
        .await?;
    factory::create_maintenance_record(db, other.id).await?;

    let repo = MaintenanceRecordRepository::new(db);
    let records = repo.get_by_vehicle(vehicle.id).await?;

    assert_eq!(
        records.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![recent.id, old.id]
    );
    assert_eq!(records[0].kind, Some(MaintenanceKind::Inspection));

    Ok(())
}
