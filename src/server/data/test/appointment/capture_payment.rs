use super::*;
use test_utils::factory::payment::PaymentFactory;

use crate::server::model::payment::PaymentCapture;

/// Tests recording the capture of a booking awaiting payment.
///
/// Expected: Confirmed with the appointment confirmed and the payment completed
/// with its transaction id
#[tokio::test]
async fn confirms_appointment_and_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::PaymentPending)
        .build()
        .await?;
    PaymentFactory::new(db, &appointment)
        .status(PaymentStatus::Pending)
        .transaction_id(None)
        .build()
        .await?;

    let capture = AppointmentRepository::new(db)
        .capture_payment(&appointment.payment_id, Some("pi_123"))
        .await?;

    let PaymentCapture::Confirmed(confirmed) = capture else {
        panic!("expected a confirmed booking, got {:?}", capture);
    };
    assert_eq!(confirmed.status, AppointmentStatus::Confirmed);

    let payment = entity::prelude::Payment::find_by_id(appointment.payment_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(payment.transaction_id.as_deref(), Some("pi_123"));

    Ok(())
}

/// Tests a capture for a booking cancelled while the checkout was open.
///
/// Verifies the appointment keeps its cancelled status while the payment
/// records the capture so it can be refunded.
///
/// Expected: Closed with the appointment cancelled and the payment completed
#[tokio::test]
async fn reports_capture_of_closed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Cancelled)
        .build()
        .await?;
    PaymentFactory::new(db, &appointment)
        .status(PaymentStatus::Failed)
        .transaction_id(None)
        .build()
        .await?;

    let capture = AppointmentRepository::new(db)
        .capture_payment(&appointment.payment_id, Some("pi_late"))
        .await?;

    let PaymentCapture::Closed(closed) = capture else {
        panic!("expected a closed booking, got {:?}", capture);
    };
    assert_eq!(closed.status, AppointmentStatus::Cancelled);

    let stored = entity::prelude::Appointment::find_by_id(appointment.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Cancelled);

    let payment = entity::prelude::Payment::find_by_id(appointment.payment_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(payment.transaction_id.as_deref(), Some("pi_late"));

    Ok(())
}

/// Tests a repeated capture of a payment already settled.
///
/// Expected: Ignored with the refunded payment untouched
#[tokio::test]
async fn ignores_settled_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let appointment = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Cancelled)
        .build()
        .await?;
    PaymentFactory::new(db, &appointment)
        .status(PaymentStatus::Refunded)
        .transaction_id(Some("pi_original"))
        .build()
        .await?;

    let capture = AppointmentRepository::new(db)
        .capture_payment(&appointment.payment_id, Some("pi_again"))
        .await?;

    assert!(matches!(capture, PaymentCapture::Ignored));

    let payment = entity::prelude::Payment::find_by_id(appointment.payment_id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Refunded);
    assert_eq!(payment.transaction_id.as_deref(), Some("pi_original"));

    Ok(())
}

/// Tests capturing a payment nothing references.
///
/// Expected: Ignored
#[tokio::test]
async fn ignores_unknown_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let capture = AppointmentRepository::new(db)
        .capture_payment("cccccccccccccccccccccccc", None)
        .await?;

    assert!(matches!(capture, PaymentCapture::Ignored));

    Ok(())
}
