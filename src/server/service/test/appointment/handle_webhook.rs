use super::*;

fn completed(payment_id: &str) -> WebhookEvent {
    WebhookEvent {
        kind: WebhookEventKind::CheckoutCompleted,
        payment_id: Some(payment_id.to_string()),
        transaction_id: Some("pi_captured".to_string()),
    }
}

/// Tests the provider confirming a pending checkout.
///
/// Verifies the payment is completed with the transaction id, the appointment
/// is confirmed and the client is notified exactly once even when the event is
/// delivered twice.
///
/// Expected: Ok(()) for both deliveries and a single confirmation notification
#[tokio::test]
async fn confirms_paid_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::PaymentPending)
        .build()
        .await?;
    let payment = PaymentFactory::new(db, &appointment)
        .status(PaymentStatus::Pending)
        .transaction_id(None)
        .build()
        .await?;

    let gateway = FakeGateway::delivering(completed(&payment.id));
    let service = AppointmentService::new(db, &hub, &gateway, CLIENT_URL);

    service.handle_webhook("{}", "t=1,v1=sig").await?;
    service.handle_webhook("{}", "t=1,v1=sig").await?;

    let stored = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Confirmed);

    let payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(payment.transaction_id.as_deref(), Some("pi_captured"));

    let notifications = NotificationRepository::new(db)
        .get_for(Recipient::Client(&client.id))
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationType::AppointmentConfirmed);
    assert_eq!(notifications[0].message, CONFIRMED_MESSAGE);

    Ok(())
}

/// Tests a capture arriving after the client cancelled during checkout.
///
/// Verifies the cancelled booking is not revived, the late capture is refunded
/// and the client is told about the refund.
///
/// Expected: Ok(()) with the appointment cancelled and the payment refunded
#[tokio::test]
async fn refunds_capture_for_booking_cancelled_during_checkout() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = SlotFactory::new(db, &lawyer.id)
        .status(SlotStatus::Booked)
        .build()
        .await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::PaymentPending)
        .build()
        .await?;
    let payment = PaymentFactory::new(db, &appointment)
        .status(PaymentStatus::Pending)
        .transaction_id(None)
        .build()
        .await?;

    let gateway = FakeGateway::delivering(completed(&payment.id));
    let service = AppointmentService::new(db, &hub, &gateway, CLIENT_URL);

    service
        .cancel_by_client(&client.id, update_dto(&appointment.id, "cancelled"))
        .await?;
    service.handle_webhook("{}", "t=1,v1=sig").await?;

    let stored = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Cancelled);

    let stored_payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(stored_payment.status, PaymentStatus::Refunded);
    assert_eq!(
        gateway.refunds(),
        vec![("pi_captured".to_string(), payment.amount)]
    );

    let messages: Vec<String> = NotificationRepository::new(db)
        .get_for(Recipient::Client(&client.id))
        .await?
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert!(messages.iter().any(|m| m == LATE_PAYMENT_REFUNDED_MESSAGE));
    assert!(!messages.iter().any(|m| m == CONFIRMED_MESSAGE));

    Ok(())
}

/// Tests a capture for a checkout the scheduler already expired.
///
/// Verifies a refund the provider declines is left for the retry job instead
/// of failing the webhook.
///
/// Expected: Ok(()) with the payment completed and the appointment cancelled
#[tokio::test]
async fn keeps_unrefunded_late_capture_for_retry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Cancelled)
        .build()
        .await?;
    let payment = PaymentFactory::new(db, &appointment)
        .status(PaymentStatus::Failed)
        .transaction_id(None)
        .build()
        .await?;

    let gateway = FakeGateway::delivering(completed(&payment.id)).failing_refunds();

    AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .handle_webhook("{}", "t=1,v1=sig")
        .await?;

    let stored = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Cancelled);

    let payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(payment.transaction_id.as_deref(), Some("pi_captured"));

    let pending_retry = AppointmentRepository::new(db)
        .get_cancelled_with_captured_payment()
        .await?;
    assert_eq!(pending_retry.len(), 1);

    Ok(())
}

/// Tests an event referencing a payment we never created.
///
/// Expected: Ok(()) without side effects
#[tokio::test]
async fn ignores_unknown_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();

    let client = factory::create_client(db).await?;
    let gateway = FakeGateway::delivering(completed(&factory::helpers::next_hex_id()));

    AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .handle_webhook("{}", "t=1,v1=sig")
        .await?;

    assert!(NotificationRepository::new(db)
        .get_for(Recipient::Client(&client.id))
        .await?
        .is_empty());

    Ok(())
}

/// Tests events the booking flow does not act on.
///
/// Expected: Ok(()) and the appointment still awaiting payment
#[tokio::test]
async fn ignores_unrelated_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::PaymentPending)
        .build()
        .await?;
    let payment = PaymentFactory::new(db, &appointment)
        .status(PaymentStatus::Pending)
        .build()
        .await?;

    let gateway = FakeGateway::delivering(WebhookEvent {
        kind: WebhookEventKind::Ignored,
        payment_id: Some(payment.id.clone()),
        transaction_id: None,
    });

    AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .handle_webhook("{}", "t=1,v1=sig")
        .await?;

    let stored = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::PaymentPending);

    Ok(())
}

/// Tests a body whose signature does not verify.
///
/// Expected: Err(PaymentError::InvalidSignature)
#[tokio::test]
async fn rejects_invalid_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let result = AppointmentService::new(test.db(), &hub, &gateway, CLIENT_URL)
        .handle_webhook("{}", "forged")
        .await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::InvalidSignature))
    ));

    Ok(())
}
