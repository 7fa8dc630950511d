use super::*;

/// Tests the confirmed-sessions window.
///
/// Verifies that sections outside the window and sections whose appointment is
/// not confirmed are excluded.
///
/// Expected: Ok with only the confirmed section inside the window
#[tokio::test]
async fn returns_confirmed_sections_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db();
    let now = Utc::now();

    let (client, lawyer, slot, confirmed) = create_appointment_with_dependencies(db).await?;
    let inside = VideoSectionFactory::new(db, &confirmed)
        .start_time(now + Duration::hours(3))
        .build()
        .await?;

    let later = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .build()
        .await?;
    VideoSectionFactory::new(db, &later)
        .start_time(now + Duration::days(5))
        .build()
        .await?;

    let cancelled = AppointmentFactory::new(db, &client.id, &lawyer.id, &slot.id)
        .status(AppointmentStatus::Cancelled)
        .build()
        .await?;
    VideoSectionFactory::new(db, &cancelled)
        .start_time(now + Duration::hours(4))
        .build()
        .await?;

    let repo = VideoSectionRepository::new(db);
    let sections = repo
        .get_confirmed_between(
            Some((entity::video_section::Column::ClientId, &client.id)),
            now,
            now + Duration::days(2),
        )
        .await?;

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].id, inside.id);

    let all = repo
        .get_confirmed_between(None, now, now + Duration::days(2))
        .await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
