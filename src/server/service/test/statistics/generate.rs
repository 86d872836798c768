use super::*;

/// Tests the report for one VW Golf with one accepted booking in each of the last two
/// months.
///
/// Expected: one pickup in both months, unchanged, brand "VW" at zero hours
#[tokio::test]
async fn compares_single_vehicle_across_months() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_in_department(db, "IT").await?;
    let vehicle = factory::VehicleFactory::new(db)
        .model("VW Golf")
        .license_plate("B-FP 100")
        .odometer(15000)
        .build()
        .await?;

    let this_month = Utc.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap();
    let last_month = Utc.with_ymd_and_hms(2025, 2, 10, 8, 0, 0).unwrap();
    for start in [this_month, last_month] {
        factory::BookingFactory::new(db, vehicle.id, user.id)
            .window(start, start + Duration::hours(6))
            .accepted()
            .build()
            .await?;
    }

    let report = StatisticsService::new(db).generate(report_instant()).await?;

    assert_eq!(report.this_month.total_pickups, 1);
    assert_eq!(report.this_month.last_month_pickups, 1);
    assert_eq!(report.this_month.pickups_change_abs, 0);
    assert_eq!(report.this_month.pickups_change_pct, 0.0);
    assert_eq!(report.drive_time.total_hours, 0.0);
    assert_eq!(report.drive_time.by_brand.get("VW"), Some(&0.0));
    assert_eq!(report.kilometers.total, 0.0);
    assert_eq!(report.kilometers.by_vehicle.get("B-FP 100"), Some(&15000));
    assert_eq!(report.department_usage.get("IT"), Some(&100.0));

    let dto = report.into_dto();
    assert_eq!(dto.device_stats.mobile, 73);
    assert_eq!(dto.device_stats.desktop, 27);
    assert_eq!(dto.period.year, 2025);
    assert_eq!(dto.period.month, 3);

    Ok(())
}

/// Tests the kilometer breakdown for a fleet of two vehicles of the same model.
///
/// Expected: one entry per vehicle with its own odometer
#[tokio::test]
async fn reports_kilometers_for_every_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (plate, odometer) in [("B-FP 100", 15000), ("B-FP 101", 42000)] {
        factory::VehicleFactory::new(db)
            .model("VW Golf")
            .license_plate(plate)
            .odometer(odometer)
            .build()
            .await?;
    }

    let report = StatisticsService::new(db).generate(report_instant()).await?;

    assert_eq!(report.kilometers.by_vehicle.len(), 2);
    assert_eq!(report.kilometers.by_vehicle.get("B-FP 100"), Some(&15000));
    assert_eq!(report.kilometers.by_vehicle.get("B-FP 101"), Some(&42000));

    Ok(())
}

/// Tests fuel consumption without any fuel logged this month.
///
/// A log from the previous month must not count.
///
/// Expected: the five default fuel types at zero
#[tokio::test]
async fn reports_default_fuel_types_without_logs() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    factory::FuelLogFactory::new(db, vehicle.id)
        .date(Utc.with_ymd_and_hms(2025, 2, 20, 9, 0, 0).unwrap())
        .liters(40.0)
        .build()
        .await?;

    let report = StatisticsService::new(db).generate(report_instant()).await?;

    let keys: Vec<&str> = report.fuel_consumption.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Auto Gas", "Diesel", "Strom", "Super", "Super Plus"]);
    assert!(report.fuel_consumption.values().all(|liters| *liters == 0.0));

    Ok(())
}

/// Tests fuel consumption grouped by fuel type.
///
/// Expected: liters summed per type, no default keys
#[tokio::test]
async fn sums_fuel_per_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let date = Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap();
    for (fuel_type, liters) in [("Diesel", 40.0), ("Diesel", 12.5), ("Super", 30.0)] {
        factory::FuelLogFactory::new(db, vehicle.id)
            .date(date)
            .fuel_type(fuel_type)
            .liters(liters)
            .build()
            .await?;
    }

    let report = StatisticsService::new(db).generate(report_instant()).await?;

    assert_eq!(report.fuel_consumption.len(), 2);
    assert_eq!(report.fuel_consumption.get("Diesel"), Some(&52.5));
    assert_eq!(report.fuel_consumption.get("Super"), Some(&30.0));

    Ok(())
}

/// Tests department shares with a booking by a user without department.
///
/// Expected: every share in [0, 100], sum below 100, no entry for the missing department
#[tokio::test]
async fn keeps_department_shares_in_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let it = factory::create_user_in_department(db, "IT").await?;
    let sales = factory::create_user_in_department(db, "Vertrieb").await?;
    let nobody = factory::create_user(db).await?;

    let start = Utc.with_ymd_and_hms(2025, 3, 5, 8, 0, 0).unwrap();
    for user_id in [it.id, it.id, sales.id, nobody.id] {
        factory::BookingFactory::new(db, vehicle.id, user_id)
            .window(start, start + Duration::hours(2))
            .accepted()
            .build()
            .await?;
    }

    let report = StatisticsService::new(db).generate(report_instant()).await?;

    assert_eq!(report.department_usage.len(), 2);
    assert_eq!(report.department_usage.get("IT"), Some(&50.0));
    assert_eq!(report.department_usage.get("Vertrieb"), Some(&25.0));
    assert!(report
        .department_usage
        .values()
        .all(|share| (0.0..=100.0).contains(share)));
    assert!(report.department_usage.values().sum::<f64>() <= 100.0);

    Ok(())
}

/// Tests department shares without accepted bookings.
///
/// Expected: the five default departments at zero
#[tokio::test]
async fn reports_default_departments_without_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let report = StatisticsService::new(db).generate(report_instant()).await?;

    assert_eq!(report.department_usage.len(), 5);
    assert!(report.department_usage.contains_key("Produktion"));
    assert!(report.department_usage.values().all(|share| *share == 0.0));

    Ok(())
}

/// Tests inspection costs of the current year.
///
/// Only inspections count; months without inspections report zero.
///
/// Expected: Jan 200, Mar 150, every other month 0
#[tokio::test]
async fn reports_zero_for_months_without_inspections() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let records = [
        (Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap(), "Inspektion", 120.0),
        (Utc.with_ymd_and_hms(2025, 1, 28, 9, 0, 0).unwrap(), "Inspektion", 80.0),
        (Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(), "Inspektion", 150.0),
        (Utc.with_ymd_and_hms(2025, 3, 2, 9, 0, 0).unwrap(), "Reparatur", 900.0),
        (Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(), "Inspektion", 70.0),
    ];
    for (date, kind, cost) in records {
        factory::MaintenanceRecordFactory::new(db, vehicle.id)
            .date(date)
            .kind(kind)
            .cost(cost)
            .build()
            .await?;
    }

    let report = StatisticsService::new(db).generate(report_instant()).await?;

    assert_eq!(report.inspection_costs[0], 200.0);
    assert_eq!(report.inspection_costs[2], 150.0);
    let empty_months = report
        .inspection_costs
        .iter()
        .enumerate()
        .filter(|(month, _)| *month != 0 && *month != 2);
    for (_, cost) in empty_months {
        assert_eq!(*cost, 0.0);
    }

    let dto = report.into_dto();
    assert_eq!(dto.inspection_costs.get("Jan"), Some(200.0));
    assert_eq!(dto.inspection_costs.get("Dec"), Some(0.0));

    Ok(())
}

/// Tests drive time taken from recorded statistics rows.
///
/// Rows outside the month are ignored and rows without sub-category are grouped.
///
/// Expected: total 12.5 with BMW 8, other 4.5, and a 90 % last month estimate
#[tokio::test]
async fn sums_recorded_drive_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::VehicleFactory::new(db).model("Audi A4").build().await?;

    let rows = [
        (NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), Some("BMW"), 5.0),
        (NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(), Some("BMW"), 3.0),
        (NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(), None, 4.5),
        (NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(), Some("BMW"), 100.0),
    ];
    for (date, brand, hours) in rows {
        let mut row = factory::StatisticsDataFactory::new(db)
            .date(date)
            .category("drive_time")
            .value(hours);
        if let Some(brand) = brand {
            row = row.sub_category(brand);
        }
        row.build().await?;
    }

    let report = StatisticsService::new(db).generate(report_instant()).await?;

    assert_eq!(report.drive_time.total_hours, 12.5);
    assert_eq!(report.drive_time.by_brand.get("BMW"), Some(&8.0));
    assert_eq!(report.drive_time.by_brand.get("other"), Some(&4.5));
    assert!(!report.drive_time.by_brand.contains_key("Audi"));
    assert_eq!(report.this_month.drive_time_hours, 12.5);
    assert_eq!(report.this_month.last_month_drive_time_hours, 12.5 * 0.9);

    Ok(())
}

/// Tests drive time when only earlier months have recorded rows.
///
/// Expected: fleet brands at zero hours, February hours not carried over
#[tokio::test]
async fn falls_back_to_fleet_brands_with_only_old_drive_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::VehicleFactory::new(db).model("Audi A4").build().await?;
    factory::StatisticsDataFactory::new(db)
        .date(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap())
        .category("drive_time")
        .sub_category("BMW")
        .value(6.0)
        .build()
        .await?;

    let report = StatisticsService::new(db).generate(report_instant()).await?;

    assert_eq!(report.drive_time.total_hours, 0.0);
    assert_eq!(report.drive_time.by_brand.get("Audi"), Some(&0.0));
    assert!(!report.drive_time.by_brand.contains_key("BMW"));

    Ok(())
}

/// Tests that two reports for the same instant and data are identical.
///
/// Expected: byte-identical JSON
#[tokio::test]
async fn generates_identical_reports_for_same_instant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle) = factory::helpers::create_user_and_vehicle(db).await?;
    factory::VehicleFactory::new(db).model("Opel Corsa").build().await?;
    let start = Utc.with_ymd_and_hms(2025, 3, 4, 8, 0, 0).unwrap();
    factory::BookingFactory::new(db, vehicle.id, user.id)
        .window(start, start + Duration::hours(3))
        .accepted()
        .build()
        .await?;

    let service = StatisticsService::new(db);
    let first = service.generate(report_instant()).await?.into_dto();
    let second = service.generate(report_instant()).await?.into_dto();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    Ok(())
}

/// Tests that a failing query aborts the whole report.
///
/// Expected: Err(AppError::StatisticsErr)
#[tokio::test]
async fn fails_without_partial_report() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StatisticsService::new(db).generate(report_instant()).await;

    assert!(matches!(result, Err(AppError::StatisticsErr(_))));

    Ok(())
}
