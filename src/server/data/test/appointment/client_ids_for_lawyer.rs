use super::*;

/// Tests collecting a lawyer's clients.
///
/// Verifies that a client with several appointments appears once and that
/// clients of other lawyers are not included.
///
/// Expected: Ok with one id per client
#[tokio::test]
async fn returns_distinct_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let (client, lawyer, slot, appointment) = create_appointment_with_dependencies(db).await?;
    AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .date(appointment.appointment_date + Duration::days(7))
        .build()
        .await?;
    create_appointment_with_dependencies(db).await?;

    let ids = AppointmentRepository::new(db)
        .client_ids_for_lawyer(&lawyer.id)
        .await?;

    assert_eq!(ids, vec![client.id]);

    Ok(())
}
