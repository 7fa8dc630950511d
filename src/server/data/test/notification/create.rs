use super::*;

/// Tests storing a notification for a lawyer.
///
/// Expected: Ok with the lawyer side set and the client side empty
#[tokio::test]
async fn stores_recipient_side() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParams {
            recipient: Recipient::Lawyer("dddddddddddddddddddddddd"),
            appointment_id: Some("eeeeeeeeeeeeeeeeeeeeeeee"),
            kind: NotificationType::AppointmentReminder,
            message: "Starts soon".to_string(),
        })
        .await?;

    assert_eq!(notification.lawyer_id.as_deref(), Some("dddddddddddddddddddddddd"));
    assert!(notification.client_id.is_none());
    assert_eq!(notification.recipient_id(), Some("dddddddddddddddddddddddd"));

    assert!(
        repo.exists_for_appointment(
            "eeeeeeeeeeeeeeeeeeeeeeee",
            NotificationType::AppointmentReminder
        )
        .await?
    );
    assert!(
        !repo
            .exists_for_appointment(
                "eeeeeeeeeeeeeeeeeeeeeeee",
                NotificationType::AppointmentCanceled
            )
            .await?
    );

    let listed = repo
        .get_for(Recipient::Lawyer("dddddddddddddddddddddddd"))
        .await?;
    assert_eq!(listed.len(), 1);

    Ok(())
}
