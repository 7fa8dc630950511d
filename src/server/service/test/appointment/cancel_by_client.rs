use super::*;

/// Tests a client cancelling a paid appointment.
///
/// Verifies the captured payment is refunded, the slot is released, the video
/// session is cancelled and both participants are notified.
///
/// Expected: Ok(Appointment) with status cancelled and the client's notes
#[tokio::test]
async fn cancels_and_refunds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = SlotFactory::new(db, &lawyer.id)
        .status(SlotStatus::Booked)
        .build()
        .await?;
    let appointment = factory::create_appointment(db, &client.id, &lawyer.id, &slot.id).await?;
    let payment = PaymentFactory::new(db, &appointment)
        .transaction_id(Some("pi_refund_me"))
        .build()
        .await?;
    VideoSectionFactory::new(db, &appointment).build().await?;

    let mut dto = update_dto(&appointment.id, "cancelled");
    dto.notes = Some("  Settled out of court  ".to_string());

    let cancelled = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .cancel_by_client(&client.id, dto)
        .await?;

    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(cancelled.notes.as_deref(), Some("Settled out of court"));

    assert_eq!(
        gateway.refunds(),
        vec![("pi_refund_me".to_string(), payment.amount)]
    );
    let payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(payment.status, PaymentStatus::Refunded);

    let slot = SlotRepository::new(db).find_by_id(&slot.id).await?.unwrap();
    assert_eq!(slot.status, SlotStatus::Available);

    let section = VideoSectionRepository::new(db)
        .find_by_appointment_id(&appointment.id)
        .await?
        .unwrap();
    assert_eq!(section.status, VideoSectionStatus::Cancelled);

    let notifications = NotificationRepository::new(db);
    let to_client = notifications.get_for(Recipient::Client(&client.id)).await?;
    assert_eq!(to_client.len(), 1);
    assert_eq!(to_client[0].message, CANCELLED_MESSAGE);
    let to_lawyer = notifications.get_for(Recipient::Lawyer(&lawyer.id)).await?;
    assert_eq!(to_lawyer.len(), 1);
    assert_eq!(to_lawyer[0].kind, NotificationType::AppointmentCanceled);

    Ok(())
}

/// Tests a client cancelling while the checkout is still open.
///
/// Verifies the pending payment is marked failed, nothing is refunded and the
/// client is not promised a refund.
///
/// Expected: Ok(Appointment) cancelled with an unpaid cancellation message
#[tokio::test]
async fn cancels_unpaid_booking_without_refund() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

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

    let cancelled = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .cancel_by_client(&client.id, update_dto(&appointment.id, "cancelled"))
        .await?;

    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert!(gateway.refunds().is_empty());

    let payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(payment.status, PaymentStatus::Failed);

    let to_client = NotificationRepository::new(db)
        .get_for(Recipient::Client(&client.id))
        .await?;
    assert_eq!(to_client.len(), 1);
    assert_eq!(to_client[0].message, UNPAID_CANCELLED_MESSAGE);

    Ok(())
}

/// Tests a cancellation whose refund the provider declines.
///
/// Verifies nothing is cancelled so the client can try again.
///
/// Expected: Err(AppError::PaymentErr) with appointment, payment and slot unchanged
#[tokio::test]
async fn keeps_booking_when_refund_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default().failing_refunds();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = SlotFactory::new(db, &lawyer.id)
        .status(SlotStatus::Booked)
        .build()
        .await?;
    let appointment = factory::create_appointment(db, &client.id, &lawyer.id, &slot.id).await?;
    let payment = factory::create_payment(db, &appointment).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .cancel_by_client(&client.id, update_dto(&appointment.id, "cancelled"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::Provider(_)))
    ));

    let stored = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Confirmed);

    let payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);

    let slot = SlotRepository::new(db).find_by_id(&slot.id).await?.unwrap();
    assert_eq!(slot.status, SlotStatus::Booked);

    assert!(NotificationRepository::new(db)
        .get_for(Recipient::Client(&client.id))
        .await?
        .is_empty());

    Ok(())
}

/// Tests a client trying to set a status other than cancelled.
///
/// Expected: Err(AppError::Forbidden) and the appointment unchanged
#[tokio::test]
async fn rejects_other_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let (client, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .cancel_by_client(&client.id, update_dto(&appointment.id, "completed"))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let stored = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Confirmed);

    Ok(())
}

/// Tests cancelling the appointment of another client.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_appointment_of_other_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let (_, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let stranger = factory::create_client(db).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .cancel_by_client(&stranger.id, update_dto(&appointment.id, "cancelled"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests cancelling an appointment that already took place.
///
/// Expected: Err(AppError::BadRequest) and no refund
#[tokio::test]
async fn rejects_closed_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Completed)
        .build()
        .await?;
    factory::create_payment(db, &appointment).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .cancel_by_client(&client.id, update_dto(&appointment.id, "cancelled"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(gateway.refunds().is_empty());

    Ok(())
}
