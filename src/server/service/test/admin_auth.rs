use test_utils::{builder::TestBuilder, factory};

use super::*;
use crate::server::{
    data::{account::AccountStore, admin::AdminRepository},
    service::auth::admin::AdminAuthService,
};

/// Tests seeding the first admin on an empty store.
///
/// Verifies the email is normalised and the password stored as a hash.
///
/// Expected: Ok(true) and a usable admin account
#[tokio::test]
async fn seeds_first_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db();
    let tokens = tokens();
    let mailer = RecordingMailer::default();

    let created = AdminAuthService::new(auth_context(db, &tokens, &mailer))
        .seed_admin(" Root@Example.com ", "Admin@123")
        .await?;

    assert!(created);

    let admin = AdminRepository::new(db)
        .find_account_by_email("root@example.com")
        .await?
        .expect("admin seeded");
    let hash = admin.password_hash.expect("password stored");
    assert_ne!(hash, "Admin@123");
    assert!(PasswordHasher::new(HASH_COST).verify("Admin@123", &hash));

    Ok(())
}

/// Tests seeding when an admin already exists.
///
/// Expected: Ok(false) and no second admin
#[tokio::test]
async fn skips_seed_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db();
    let tokens = tokens();
    let mailer = RecordingMailer::default();

    factory::create_admin(db).await?;

    let created = AdminAuthService::new(auth_context(db, &tokens, &mailer))
        .seed_admin("second@example.com", "Admin@123")
        .await?;

    assert!(!created);
    assert!(AdminRepository::new(db)
        .find_account_by_email("second@example.com")
        .await?
        .is_none());

    Ok(())
}

/// Tests seeding the same credentials twice.
///
/// Expected: Ok(true) on the first call, Ok(false) on the second
#[tokio::test]
async fn seeds_only_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db();
    let tokens = tokens();
    let mailer = RecordingMailer::default();
    let service = AdminAuthService::new(auth_context(db, &tokens, &mailer));

    assert!(service.seed_admin("root@example.com", "Admin@123").await?);
    assert!(!service.seed_admin("root@example.com", "Admin@123").await?);

    Ok(())
}
