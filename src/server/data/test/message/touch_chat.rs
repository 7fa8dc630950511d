use super::*;

/// Tests that touching a chat moves it to the top of the list.
///
/// Expected: Ok with the touched chat listed first
#[tokio::test]
async fn touched_chat_sorts_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let lawyer = factory::create_lawyer(db).await?;
    let first = factory::create_client(db).await?;
    let second = factory::create_client(db).await?;
    let older = factory::create_chat(db, &lawyer, &first).await?;
    factory::create_chat(db, &lawyer, &second).await?;

    let repo = ChatRepository::new(db);
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    repo.touch(&older.id).await?;

    let chats = repo
        .get_for_participant(entity::chat::Column::LawyerId, &lawyer.id)
        .await?;

    assert_eq!(chats.len(), 2);
    assert_eq!(chats[0].id, older.id);
    assert!(repo
        .find_by_participants(&lawyer.id, &second.id)
        .await?
        .is_some());

    Ok(())
}
