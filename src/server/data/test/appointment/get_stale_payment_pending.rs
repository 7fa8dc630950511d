use super::*;

/// Tests finding abandoned checkouts.
///
/// Expected: Ok with only payment-pending appointments created before the cutoff
#[tokio::test]
async fn returns_old_unpaid_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();

    let (client, lawyer, slot, _) = create_appointment_with_dependencies(db).await?;
    let stale = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::PaymentPending)
        .created_at(Utc::now() - Duration::minutes(45))
        .build()
        .await?;
    AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::PaymentPending)
        .build()
        .await?;

    let found = AppointmentRepository::new(db)
        .get_stale_payment_pending(Utc::now() - Duration::minutes(30))
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, stale.id);

    Ok(())
}
