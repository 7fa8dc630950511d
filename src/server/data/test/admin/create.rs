use super::*;

/// Tests creating an admin account.
///
/// Verifies that the created admin can be found by email and is always treated
/// as verified and unblocked.
///
/// Expected: Ok with a verified admin account
#[tokio::test]
async fn creates_admin_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = AdminRepository::new(db);
    let created = repo.create("Admin", "admin@example.com", "hash").await?;

    let found = repo.find_account_by_email("admin@example.com").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert!(found.is_verified);
    assert!(!found.is_blocked);
    assert_eq!(found.password_hash.as_deref(), Some("hash"));

    Ok(())
}

/// Tests that admin emails are unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = AdminRepository::new(db);
    repo.create("Admin", "admin@example.com", "hash").await?;
    let result = repo.create("Other", "admin@example.com", "hash").await;

    assert!(result.is_err());

    Ok(())
}
