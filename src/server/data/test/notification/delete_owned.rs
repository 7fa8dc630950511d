use super::*;

/// Tests that callers only delete their own notifications.
///
/// Expected: Ok(1) with the other client's notification untouched
#[tokio::test]
async fn deletes_only_owned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let mine = factory::create_notification(
        db,
        Some("111111111111111111111111"),
        None,
        NotificationType::AppointmentConfirmed,
    )
    .await?;
    let theirs = factory::create_notification(
        db,
        Some("222222222222222222222222"),
        None,
        NotificationType::AppointmentConfirmed,
    )
    .await?;

    let repo = NotificationRepository::new(db);
    let deleted = repo
        .delete_owned(
            Recipient::Client("111111111111111111111111"),
            vec![mine.id, theirs.id],
        )
        .await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .get_for(Recipient::Client("111111111111111111111111"))
        .await?
        .is_empty());
    assert_eq!(
        repo.get_for(Recipient::Client("222222222222222222222222"))
            .await?
            .len(),
        1
    );

    Ok(())
}
