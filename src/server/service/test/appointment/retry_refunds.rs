use super::*;

/// Tests retrying refunds of cancelled bookings whose payment is still captured.
///
/// Verifies only the cancelled booking with a completed payment is refunded and
/// a second run finds nothing left.
///
/// Expected: Ok(1), then Ok(0)
#[tokio::test]
async fn refunds_stranded_captures_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;

    let stranded = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Cancelled)
        .build()
        .await?;
    let stranded_payment = PaymentFactory::new(db, &stranded)
        .transaction_id(Some("pi_stranded"))
        .build()
        .await?;

    let settled = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .date(stranded.appointment_date + Duration::days(7))
        .status(AppointmentStatus::Cancelled)
        .build()
        .await?;
    PaymentFactory::new(db, &settled)
        .status(PaymentStatus::Refunded)
        .build()
        .await?;

    let confirmed = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .date(stranded.appointment_date + Duration::days(14))
        .build()
        .await?;
    factory::create_payment(db, &confirmed).await?;

    let service = AppointmentService::new(db, &hub, &gateway, CLIENT_URL);
    assert_eq!(service.retry_refunds().await?, 1);
    assert_eq!(service.retry_refunds().await?, 0);

    assert_eq!(
        gateway.refunds(),
        vec![("pi_stranded".to_string(), stranded_payment.amount)]
    );
    let payment = PaymentRepository::new(db)
        .find_by_id(&stranded_payment.id)
        .await?
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Refunded);

    Ok(())
}

/// Tests a retry the provider declines again.
///
/// Expected: Ok(0) with the payment still completed
#[tokio::test]
async fn keeps_declined_refund_for_next_run() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default().failing_refunds();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Cancelled)
        .build()
        .await?;
    let payment = factory::create_payment(db, &appointment).await?;

    let refunded = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .retry_refunds()
        .await?;

    assert_eq!(refunded, 0);
    let payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);

    Ok(())
}
