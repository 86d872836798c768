//! Shared helpers for the factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns a process-wide unique number for building distinct names, emails and plates.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a vehicle with default values.
///
/// Most logbook and booking tests need exactly this pair before they can insert anything.
///
/// # Returns
/// - `Ok((user, vehicle))` - The created rows
/// - `Err(DbErr)` - Insert failed
pub async fn create_user_and_vehicle(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::vehicle::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db).await?;

    Ok((user, vehicle))
}

/// Creates a user, a vehicle and a requested booking linking both.
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::vehicle::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (user, vehicle) = create_user_and_vehicle(db).await?;
    let booking = crate::factory::booking::create_booking(db, vehicle.id, user.id).await?;

    Ok((user, vehicle, booking))
}
