use super::*;

fn booking(
    client: &entity::client::Model,
    lawyer: &entity::lawyer::Model,
    slot: &entity::slot::Model,
    suffix: &str,
) -> NewBooking {
    let date = Utc::now().date_naive() + Duration::days(1);
    let start = Utc::now() + Duration::days(1);

    NewBooking {
        appointment_id: format!("a0000000000000000000000{}", suffix),
        payment_id: format!("b0000000000000000000000{}", suffix),
        checkout_session_id: format!("cs_test_{}", suffix),
        client: Client::from_entity(client.clone()),
        lawyer: Lawyer::from_entity(lawyer.clone()).unwrap(),
        slot: Slot::from_entity(slot.clone()),
        params: CreateAppointmentParams {
            lawyer_id: lawyer.id.clone(),
            slot_id: slot.id.clone(),
            date,
            appointment_type: AppointmentType::VideoConsulting,
            reason: "Contract review".to_string(),
            notes: None,
        },
        session_start: start,
        session_end: start + Duration::minutes(60),
        room_id: format!("room-{}", suffix),
    }
}

/// Tests writing a booking.
///
/// Verifies that one call marks the slot booked and inserts the pending payment,
/// the payment-pending appointment and the pending video section.
///
/// Expected: Ok with all four rows consistent
#[tokio::test]
async fn writes_all_booking_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;
    let booking = booking(&client, &lawyer, &slot, "1");

    let appointment = AppointmentRepository::new(db)
        .create_booking(booking)
        .await?
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::PaymentPending);
    assert_eq!(appointment.payment_id, "b00000000000000000000001");

    let slot = entity::prelude::Slot::find_by_id(slot.id).one(db).await?.unwrap();
    assert_eq!(slot.status, SlotStatus::Booked);

    let payment = entity::prelude::Payment::find_by_id("b00000000000000000000001".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.order_id.as_deref(), Some("cs_test_1"));
    assert_eq!(payment.amount, 300);

    let sections = entity::prelude::VideoSection::find().all(db).await?;
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].appointment_id, appointment.id);
    assert_eq!(sections[0].status, VideoSectionStatus::Pending);
    assert_eq!(sections[0].client_name, client.name);

    Ok(())
}

/// Tests writing a booking for a slot and date another booking already holds.
///
/// Verifies the losing booking writes nothing.
///
/// Expected: Ok(None) with a single appointment and payment stored
#[tokio::test]
async fn refuses_second_booking_of_slot_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let first_client = factory::create_client(db).await?;
    let second_client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;
    let slot = factory::create_slot(db, &lawyer.id).await?;

    let repo = AppointmentRepository::new(db);
    let first = repo
        .create_booking(booking(&first_client, &lawyer, &slot, "1"))
        .await?;
    let second = repo
        .create_booking(booking(&second_client, &lawyer, &slot, "2"))
        .await?;

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(entity::prelude::Appointment::find().all(db).await?.len(), 1);
    assert_eq!(entity::prelude::Payment::find().all(db).await?.len(), 1);
    assert_eq!(entity::prelude::VideoSection::find().all(db).await?.len(), 1);

    Ok(())
}
