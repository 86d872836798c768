use super::*;
use crate::server::model::user::User;

/// Tests page count of a partially filled last page.
///
/// Expected: 5 entries at 2 per page give 3 pages, newest first
#[tokio::test]
async fn computes_total_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = User::from_entity(factory::create_user(db).await?)?;
    let service = AuditLogService::new(db);
    for index in 0..5 {
        service
            .record(
                "maintenance_created",
                &actor,
                1,
                format!("Eintrag {}", index),
                None,
                None,
            )
            .await?;
    }

    let page = service
        .get_paginated(GetAuditLogsParam {
            page: 0,
            per_page: 2,
            vehicle_id: None,
        })
        .await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.entries.len(), 2);
    assert_eq!(page.entries[0].description.as_deref(), Some("Eintrag 4"));

    Ok(())
}
