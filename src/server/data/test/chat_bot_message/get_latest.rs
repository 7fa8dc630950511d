use super::*;

/// Tests reading the latest chatbot messages.
///
/// Verifies that only the newest messages are returned, oldest first, and that
/// older messages can be pruned.
///
/// Expected: Ok with the last three messages in order
#[tokio::test]
async fn returns_latest_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .with_table(entity::prelude::ChatBotMessage)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let client = factory::create_client(db).await?;

    let repo = ChatBotMessageRepository::new(db);
    for i in 1..=5 {
        repo.create(&client.id, ChatBotRole::User, &format!("message {}", i))
            .await?;
    }

    let latest = repo.get_latest(&client.id, 3).await?;
    let texts: Vec<&str> = latest.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, vec!["message 3", "message 4", "message 5"]);

    let deleted = repo.delete_before(&client.id, latest[0].id).await?;
    assert_eq!(deleted, 2);
    assert_eq!(repo.get_latest(&client.id, 10).await?.len(), 3);

    Ok(())
}
