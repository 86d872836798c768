use super::*;

/// Tests creating a user without stored permission flags.
///
/// Verifies that the role is persisted and the effective permissions are derived from it.
///
/// Expected: Ok with employee permissions
#[tokio::test]
async fn creates_user_with_role_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_param("erika@example.com"), "hash".to_string())
        .await?;

    assert_eq!(user.role, Role::Employee);
    assert_eq!(user.stored_permissions, None);
    assert_eq!(user.permissions(), Permissions::for_role(Role::Employee));
    assert_eq!(user.password_hash, "hash");

    Ok(())
}

/// Tests creating a user with explicit permission flags.
///
/// Verifies that stored flags survive the JSON round trip through the database.
///
/// Expected: Ok with the stored flags as effective permissions
#[tokio::test]
async fn stores_explicit_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let permissions = Permissions {
        book_vehicles: true,
        view_statistics: true,
        ..Permissions::default()
    };
    let mut param = create_param("fuhrpark@example.com");
    param.permissions = Some(permissions);

    let repo = UserRepository::new(db);
    let created = repo.create(param, "hash".to_string()).await?;
    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.permissions(), permissions);

    Ok(())
}

/// Tests the unique constraint on the email column.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_param("dup@example.com"), "hash".to_string())
        .await?;
    let result = repo
        .create(create_param("dup@example.com"), "hash".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
