use super::*;

/// Tests replacing an admin's password hash.
///
/// Expected: Ok with the new hash stored
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let admin = factory::create_admin(db).await?;

    let repo = AdminRepository::new(db);
    repo.set_password(&admin.id, "new-hash").await?;

    let account = repo.find_account_by_id(&admin.id).await?.unwrap();
    assert_eq!(account.password_hash.as_deref(), Some("new-hash"));

    Ok(())
}
