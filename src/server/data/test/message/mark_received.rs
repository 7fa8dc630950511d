use super::*;

/// Tests marking messages received by one participant.
///
/// Verifies that only messages addressed to the receiver change and that the
/// unseen count drops to zero.
///
/// Expected: Ok(2) with the sender's incoming message still unseen
#[tokio::test]
async fn marks_only_incoming_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let lawyer = factory::create_lawyer(db).await?;
    let client = factory::create_client(db).await?;
    let chat = factory::create_chat(db, &lawyer, &client).await?;

    let repo = MessageRepository::new(db);
    repo.create(&chat.id, &lawyer.id, &client.id, "Hello").await?;
    repo.create(&chat.id, &lawyer.id, &client.id, "Are you there?").await?;
    repo.create(&chat.id, &client.id, &lawyer.id, "Yes").await?;

    assert_eq!(repo.count_unseen(&chat.id, &client.id).await?, 2);

    let marked = repo.mark_received(&chat.id, &client.id).await?;

    assert_eq!(marked, 2);
    assert_eq!(repo.count_unseen(&chat.id, &client.id).await?, 0);
    assert_eq!(repo.count_unseen(&chat.id, &lawyer.id).await?, 1);

    let messages = repo.get_by_chat(&chat.id).await?;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].message, "Hello");

    Ok(())
}
