use super::*;

/// Tests that unpaid appointments are not listed.
///
/// Expected: Ok with only the paid appointment counted
#[tokio::test]
async fn excludes_payment_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let (client, lawyer, slot, appointment) = create_appointment_with_dependencies(db).await?;
    AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::PaymentPending)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let (appointments, total) = repo
        .get_paginated_by_lawyer(&lawyer.id, 0, 10, None)
        .await?;
    assert_eq!(total, 1);
    assert_eq!(appointments[0].id, appointment.id);

    let (_, total) = repo
        .get_paginated_by_client(&client.id, 0, 10, None)
        .await?;
    assert_eq!(total, 1);

    Ok(())
}

/// Tests filtering by status and ordering newest first.
///
/// Expected: Ok with only cancelled appointments, newest first
#[tokio::test]
async fn filters_by_status_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let (client, lawyer, slot, _) = create_appointment_with_dependencies(db).await?;
    let older = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Cancelled)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Cancelled)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let (appointments, total) = AppointmentRepository::new(db)
        .get_paginated_by_client(&client.id, 0, 10, Some(AppointmentStatus::Cancelled))
        .await?;

    assert_eq!(total, 2);
    assert_eq!(appointments[0].id, newer.id);
    assert_eq!(appointments[1].id, older.id);

    Ok(())
}
