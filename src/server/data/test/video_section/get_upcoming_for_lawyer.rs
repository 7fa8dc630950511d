use super::*;

/// Tests listing a lawyer's upcoming sessions.
///
/// Expected: Ok with pending future sections, earliest first
#[tokio::test]
async fn lists_pending_future_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();
    let now = Utc::now();

    let (client, lawyer, slot, first) = create_appointment_with_dependencies(db).await?;
    let late = VideoSectionFactory::new(db, &first)
        .start_time(now + Duration::days(3))
        .build()
        .await?;

    let second = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .build()
        .await?;
    let early = VideoSectionFactory::new(db, &second)
        .start_time(now + Duration::hours(2))
        .build()
        .await?;

    let third = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .build()
        .await?;
    VideoSectionFactory::new(db, &third)
        .start_time(now - Duration::hours(2))
        .build()
        .await?;
    let fourth = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .build()
        .await?;
    VideoSectionFactory::new(db, &fourth)
        .start_time(now + Duration::hours(5))
        .status(VideoSectionStatus::Cancelled)
        .build()
        .await?;

    let sections = VideoSectionRepository::new(db)
        .get_upcoming_for_lawyer(&lawyer.id, now, 10)
        .await?;

    let ids: Vec<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec![early.id.as_str(), late.id.as_str()]);

    Ok(())
}
