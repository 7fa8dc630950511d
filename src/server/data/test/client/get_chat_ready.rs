use super::*;
use test_utils::factory::client::ClientFactory;

/// Tests listing clients that can be shown in a chat.
///
/// Verifies that clients without a profile image are excluded.
///
/// Expected: Ok with only clients having a profile image
#[tokio::test]
async fn excludes_clients_without_profile_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let ready = factory::create_client(db).await?;
    ClientFactory::new(db).profile_image(None).build().await?;

    let clients = ClientRepository::new(db).get_chat_ready().await?;

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, ready.id);

    Ok(())
}
