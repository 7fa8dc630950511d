use super::*;

/// Tests dropping a booking whose checkout was abandoned.
///
/// Verifies the appointment is cancelled, the payment failed, the slot freed
/// and that nobody is refunded or notified.
///
/// Expected: Ok(true)
#[tokio::test]
async fn releases_unpaid_booking() -> Result<(), AppError> {
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
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    let payment = PaymentFactory::new(db, &appointment)
        .status(PaymentStatus::Pending)
        .transaction_id(None)
        .build()
        .await?;

    let service = AppointmentService::new(db, &hub, &gateway, CLIENT_URL);
    let pending = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    assert!(service.expire_checkout(&pending).await?);

    let stored = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Cancelled);

    let payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(payment.status, PaymentStatus::Failed);

    let slot = SlotRepository::new(db).find_by_id(&slot.id).await?.unwrap();
    assert_eq!(slot.status, SlotStatus::Available);

    assert!(gateway.refunds().is_empty());
    assert!(NotificationRepository::new(db)
        .get_for(Recipient::Client(&client.id))
        .await?
        .is_empty());

    Ok(())
}

/// Tests expiring a booking whose payment was captured after it was listed as stale.
///
/// Expected: Ok(false) with the appointment still confirmed and the payment completed
#[tokio::test]
async fn leaves_booking_confirmed_meanwhile() -> Result<(), AppError> {
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

    let stale = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    AppointmentRepository::new(db)
        .capture_payment(&payment.id, Some("pi_just_in_time"))
        .await?;

    let expired = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .expire_checkout(&stale)
        .await?;

    assert!(!expired);
    let stored = AppointmentRepository::new(db)
        .find_by_id(&appointment.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Confirmed);
    let payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);
    let slot = SlotRepository::new(db).find_by_id(&slot.id).await?.unwrap();
    assert_eq!(slot.status, SlotStatus::Booked);

    Ok(())
}

/// Tests releasing a slot another active booking still holds.
///
/// Expected: Ok(()) with the slot left booked
#[tokio::test]
async fn keeps_slot_held_by_other_booking() -> Result<(), AppError> {
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
    let abandoned = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::PaymentPending)
        .build()
        .await?;
    AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .date(abandoned.appointment_date + Duration::days(7))
        .build()
        .await?;

    let pending = AppointmentRepository::new(db)
        .find_by_id(&abandoned.id)
        .await?
        .unwrap();
    AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .expire_checkout(&pending)
        .await?;

    let slot = SlotRepository::new(db).find_by_id(&slot.id).await?.unwrap();
    assert_eq!(slot.status, SlotStatus::Booked);

    Ok(())
}
