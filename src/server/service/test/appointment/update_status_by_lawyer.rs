use super::*;

/// Tests a lawyer accepting a pending appointment.
///
/// Expected: Ok(Appointment) confirmed and a confirmation sent to the client
#[tokio::test]
async fn confirms_and_notifies_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Pending)
        .build()
        .await?;

    let mut events = hub.subscribe(&client.id).await;

    let updated = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .update_status_by_lawyer(&lawyer.id, update_dto(&appointment.id, "confirmed"))
        .await?;

    assert_eq!(updated.status, AppointmentStatus::Confirmed);

    let notifications = NotificationRepository::new(db)
        .get_for(Recipient::Client(&client.id))
        .await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationType::AppointmentConfirmed);
    assert!(events.try_recv().is_ok());

    Ok(())
}

/// Tests a lawyer cancelling a paid appointment.
///
/// Expected: Ok(Appointment) cancelled with the payment refunded
#[tokio::test]
async fn cancellation_refunds_client() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let (_, lawyer, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let payment = factory::create_payment(db, &appointment).await?;

    let updated = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .update_status_by_lawyer(&lawyer.id, update_dto(&appointment.id, "cancelled"))
        .await?;

    assert_eq!(updated.status, AppointmentStatus::Cancelled);
    assert_eq!(gateway.refunds().len(), 1);

    let payment = PaymentRepository::new(db).find_by_id(&payment.id).await?.unwrap();
    assert_eq!(payment.status, PaymentStatus::Refunded);

    Ok(())
}

/// Tests a lawyer setting the status reserved for unpaid bookings.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_payment_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let (_, lawyer, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .update_status_by_lawyer(&lawyer.id, update_dto(&appointment.id, "payment-pending"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a status value outside the known set.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let (_, lawyer, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .update_status_by_lawyer(&lawyer.id, update_dto(&appointment.id, "postponed"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a lawyer updating an appointment booked with someone else.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_appointment_of_other_lawyer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let (_, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other = factory::create_lawyer(db).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .update_status_by_lawyer(&other.id, update_dto(&appointment.id, "completed"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
