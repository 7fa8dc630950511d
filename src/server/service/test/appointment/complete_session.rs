use super::*;

/// Tests the lawyer completing a session that has started.
///
/// Expected: Ok(Appointment) completed and the video section completed
#[tokio::test]
async fn completes_started_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let (_, lawyer, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let section = VideoSectionFactory::new(db, &appointment)
        .start_time(Utc::now() - Duration::minutes(20))
        .build()
        .await?;

    let completed = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .complete_session(&lawyer.id, &section.room_id)
        .await?;

    assert_eq!(completed.status, AppointmentStatus::Completed);

    let section = VideoSectionRepository::new(db)
        .find_by_room_id(&section.room_id)
        .await?
        .unwrap();
    assert_eq!(section.status, VideoSectionStatus::Completed);

    Ok(())
}

/// Tests completing a session before its start time.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_session_not_started() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let (_, lawyer, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let section = factory::create_video_section(db, &appointment).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .complete_session(&lawyer.id, &section.room_id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests completing a room that belongs to another lawyer.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_room_of_other_lawyer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db();
    let hub = RealtimeHub::new();
    let gateway = FakeGateway::default();

    let (_, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let section = VideoSectionFactory::new(db, &appointment)
        .start_time(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    let other = factory::create_lawyer(db).await?;

    let result = AppointmentService::new(db, &hub, &gateway, CLIENT_URL)
        .complete_session(&other.id, &section.room_id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
