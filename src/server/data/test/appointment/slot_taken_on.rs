use super::*;

/// Tests detecting a slot held on a date.
///
/// Verifies that only active appointments on the same date hold the slot.
///
/// Expected: Ok(true) for the booked date, Ok(false) otherwise
#[tokio::test]
async fn detects_active_booking_on_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let (client, lawyer, slot, appointment) = create_appointment_with_dependencies(db).await?;
    let repo = AppointmentRepository::new(db);

    assert!(
        repo.slot_taken_on(&slot.id, appointment.appointment_date)
            .await?
    );
    assert!(
        !repo
            .slot_taken_on(&slot.id, appointment.appointment_date + Duration::days(7))
            .await?
    );

    let cancelled_date = appointment.appointment_date + Duration::days(14);
    AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .date(cancelled_date)
        .status(AppointmentStatus::Cancelled)
        .build()
        .await?;
    assert!(!repo.slot_taken_on(&slot.id, cancelled_date).await?);

    Ok(())
}

/// Tests whether another appointment keeps a slot in use.
///
/// Expected: Ok(false) when the only active appointment is the excluded one
#[tokio::test]
async fn ignores_excluded_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let (client, lawyer, slot, appointment) = create_appointment_with_dependencies(db).await?;
    let repo = AppointmentRepository::new(db);

    assert!(!repo.slot_in_use(&slot.id, &appointment.id).await?);

    AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .date(appointment.appointment_date + Duration::days(7))
        .build()
        .await?;
    assert!(repo.slot_in_use(&slot.id, &appointment.id).await?);

    let taken = repo
        .taken_slot_ids_on(&lawyer.id, appointment.appointment_date)
        .await?;
    assert_eq!(taken, vec![slot.id]);

    Ok(())
}
