use super::*;

/// Tests the CSV export of two vehicles.
///
/// Fields containing commas are quoted.
///
/// Expected: header row followed by one row per vehicle
#[tokio::test]
async fn exports_header_and_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let images = placeholder_images();

    let golf = factory::VehicleFactory::new(db)
        .model("VW Golf")
        .license_plate("B-FP 100")
        .image("https://cdn.example.com/golf.jpg")
        .build()
        .await?;
    let transporter = factory::VehicleFactory::new(db)
        .model("VW Transporter, lang")
        .license_plate("B-FP 101")
        .status("maintenance")
        .build()
        .await?;

    let csv = VehicleService::new(db, &images).export_csv().await?;
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,model,license_plate,image,status");
    assert_eq!(
        lines[1],
        format!("{},VW Golf,B-FP 100,https://cdn.example.com/golf.jpg,available", golf.id)
    );
    assert_eq!(
        lines[2],
        format!("{},\"VW Transporter, lang\",B-FP 101,,maintenance", transporter.id)
    );

    Ok(())
}
