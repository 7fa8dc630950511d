use super::*;

/// Tests detecting whether an admin has been seeded.
///
/// Expected: Ok(false) before and Ok(true) after creating an admin
#[tokio::test]
async fn detects_seeded_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Admin)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = AdminRepository::new(db);
    assert!(!repo.exists().await?);

    factory::create_admin(db).await?;

    assert!(repo.exists().await?);

    Ok(())
}
