use sea_orm::EntityTrait;
use test_utils::factory::lawyer::LawyerFactory;

use super::*;
use crate::server::model::appointment::{CHECKOUT_TIMEOUT_MINUTES, CONSULTATION_FEE};

fn booking_dto(lawyer_id: &str, slot_id: &str, date: chrono::NaiveDate) -> CreateAppointmentDto {
    CreateAppointmentDto {
        lawyer_id: Some(lawyer_id.to_string()),
        slot_id: Some(slot_id.to_string()),
        date: Some(date.to_string()),
        appointment_type: Some("video-consulting".to_string()),
        reason: Some("Boundary dispute with neighbour".to_string()),
        notes: None,
    }
}

fn tomorrow() -> chrono::NaiveDate {
    Utc::now().date_naive() + Duration::days(1)
}

/// Tests booking a free slot.
///
/// Verifies a checkout is opened for the consultation fee and the booking is
/// stored awaiting payment with a pending payment row and a booked slot.
///
/// Expected: Ok(BookingCheckout) pointing at the provider's checkout page
#[tokio::test]
async fn books_free_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;

    let checkout = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .book(&client.id, booking_dto(&lawyer.id, &slot.id, tomorrow()))
        .await?;

    let requests = gateway.checkouts();
    assert_eq!(requests.len(), 1);
    let payment_id = requests[0].payment_id.clone();
    assert_eq!(requests[0].amount, CONSULTATION_FEE);
    assert_eq!(
        requests[0].success_url,
        format!("{}/new-appointment/{}", CLIENT_URL, payment_id)
    );
    let lifetime = requests[0].expires_at - Utc::now();
    assert!(lifetime > Duration::minutes(30));
    assert!(lifetime <= Duration::minutes(CHECKOUT_TIMEOUT_MINUTES));
    assert_eq!(checkout.session_id, format!("cs_{}", payment_id));
    assert_eq!(
        checkout.checkout_url,
        format!("https://checkout.test/{}", payment_id)
    );

    let appointment = AppointmentRepository::new(db)
        .find_by_payment_id(&payment_id)
        .await?
        .expect("appointment stored");
    assert_eq!(appointment.status, AppointmentStatus::PaymentPending);
    assert_eq!(appointment.appointment_date, tomorrow());

    let payment = PaymentRepository::new(db)
        .find_by_id(&payment_id)
        .await?
        .expect("payment stored");
    assert_eq!(payment.status, PaymentStatus::Pending);

    let slot = SlotRepository::new(db).find_by_id(&slot.id).await?.unwrap();
    assert_eq!(slot.status, SlotStatus::Booked);

    assert!(VideoSectionRepository::new(db)
        .find_by_appointment_id(&appointment.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests booking a slot already held on the requested date.
///
/// Expected: Err(AppError::Conflict) without opening a checkout
#[tokio::test]
async fn rejects_slot_taken_on_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let other = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    factory::create_appointment(db, &other.id, &lawyer.id, &slot.id).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .book(&client.id, booking_dto(&lawyer.id, &slot.id, tomorrow()))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(gateway.checkouts().is_empty());

    Ok(())
}

/// Tests booking a slot on a date whose weekday differs from the slot's.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_date_on_other_weekday() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .book(
            &client.id,
            booking_dto(&lawyer.id, &slot.id, tomorrow() + Duration::days(1)),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking one lawyer with the slot of another.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_slot_of_other_lawyer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let other = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &other.id).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .book(&client.id, booking_dto(&lawyer.id, &slot.id, tomorrow()))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking by a client without an address on file.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_incomplete_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = ClientFactory::new(db).address(None).build().await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .book(&client.id, booking_dto(&lawyer.id, &slot.id, tomorrow()))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Profile is missing"));

    Ok(())
}

/// Tests booking a date in the past.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_past_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let yesterday = Utc::now().date_naive() - Duration::days(1);
    let slot = SlotFactory::new(db, &lawyer.id)
        .day(factory::slot::day_of(yesterday))
        .build()
        .await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .book(&client.id, booking_dto(&lawyer.id, &slot.id, yesterday))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests booking a slot id that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_slot() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .book(
            &client.id,
            booking_dto(&lawyer.id, &factory::helpers::next_hex_id(), tomorrow()),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two clients booking the same slot and date at the same time.
///
/// Verifies the slot is sold once and the losing checkout is closed again.
///
/// Expected: one Ok(BookingCheckout) and one Err(AppError::Conflict)
#[tokio::test]
async fn sells_slot_once_under_concurrent_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::slow_checkout(std::time::Duration::from_millis(50));

    let first = factory::create_client(db).await?;
    let second = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;

    let service = AppointmentService::new(db, &hub, &gateway, CLIENT_URL);
    let (a, b) = tokio::join!(
        service.book(&first.id, booking_dto(&lawyer.id, &slot.id, tomorrow())),
        service.book(&second.id, booking_dto(&lawyer.id, &slot.id, tomorrow())),
    );

    let results = [a, b];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(AppError::Conflict(_))))
            .count(),
        1
    );

    assert_eq!(
        entity::prelude::Appointment::find().all(db).await?.len(),
        1
    );
    assert_eq!(gateway.checkouts().len() - gateway.expired().len(), 1);

    Ok(())
}

/// Tests booking today's session that starts before the same-day lead time.
///
/// Expected: Err(AppError::BadRequest) without opening a checkout
#[tokio::test]
async fn rejects_session_within_lead_time() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let today = Utc::now().date_naive();
    let slot = SlotFactory::new(db, &lawyer.id)
        .day(factory::slot::day_of(today))
        .time("12:00 AM", "01:00 AM")
        .build()
        .await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .book(&client.id, booking_dto(&lawyer.id, &slot.id, today))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(gateway.checkouts().is_empty());

    Ok(())
}

/// Tests booking lawyers who may not take consultations.
///
/// Verifies both a blocked and an unverified lawyer are refused.
///
/// Expected: Err(AppError::Forbidden) without opening a checkout
#[tokio::test]
async fn rejects_blocked_or_unverified_lawyer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let client = factory::create_client(db).await?;
    let blocked = LawyerFactory::new(db)
        .verified(false)
        .blocked(true)
        .build()
        .await?;
    let unverified = LawyerFactory::new(db).verified(false).build().await?;

    let service = AppointmentService::new(db, &hub, &gateway, CLIENT_URL);
    for lawyer in [blocked, unverified] {
        let slot = factory::create_slot(db, &lawyer.id).await?;

        let result = service
            .book(&client.id, booking_dto(&lawyer.id, &slot.id, tomorrow()))
            .await;

        assert!(
            matches!(result, Err(AppError::Forbidden(msg)) if msg == "Lawyer blocked or not verified")
        );
    }
    assert!(gateway.checkouts().is_empty());

    Ok(())
}
