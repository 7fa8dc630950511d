use super::*;
use test_utils::factory::client::ClientFactory;

/// Tests marking a client verified.
///
/// Expected: Ok with the account now verified
#[tokio::test]
async fn marks_client_verified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let client = ClientFactory::new(db).verified(false).build().await?;

    let repo = ClientRepository::new(db);
    repo.mark_verified(&client.id).await?;

    let account = repo.find_account_by_id(&client.id).await?.unwrap();
    assert!(account.is_verified);

    Ok(())
}
