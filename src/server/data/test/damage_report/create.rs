use super::*;

/// Tests filing a damage report with images.
///
/// Expected: Ok with status reported and the image list preserved in order
#[tokio::test]
async fn files_report_with_images() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let images = vec!["uploads/kratzer-1.jpg".to_string(), "uploads/kratzer-2.jpg".to_string()];

    let repo = DamageReportRepository::new(db);
    let report = repo
        .create(CreateDamageReportParam {
            vehicle_id: vehicle.id,
            date: Utc::now(),
            description: "Kratzer an der Fahrertür".to_string(),
            images: images.clone(),
            repair_cost: None,
        })
        .await?;

    assert_eq!(report.status, DamageStatus::Reported);
    assert_eq!(report.images, images);

    Ok(())
}
