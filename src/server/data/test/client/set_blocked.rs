use super::*;

/// Tests blocking and unblocking a client.
///
/// Expected: Ok(true) for an existing client with the flag toggled
#[tokio::test]
async fn toggles_blocked_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let client = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    assert!(repo.set_blocked(&client.id, true).await?);
    assert!(repo.find_by_id(&client.id).await?.unwrap().is_blocked);

    assert!(repo.set_blocked(&client.id, false).await?);
    assert!(!repo.find_by_id(&client.id).await?.unwrap().is_blocked);

    Ok(())
}

/// Tests blocking a client that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let updated = ClientRepository::new(db)
        .set_blocked("aaaaaaaaaaaaaaaaaaaaaaaa", true)
        .await?;

    assert!(!updated);

    Ok(())
}
