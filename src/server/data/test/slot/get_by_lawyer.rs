use super::*;

/// Tests slot ordering.
///
/// Verifies that slots are ordered by weekday (Sunday first) and then by start
/// time, comparing times as clock values rather than strings.
///
/// Expected: Ok with slots in week order
#[tokio::test]
async fn orders_by_day_then_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .with_table(entity::prelude::Slot)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let lawyer = factory::create_lawyer(db).await?;

    for (day, start, end) in [
        (Day::Tuesday, "09:00 AM", "10:00 AM"),
        (Day::Monday, "01:00 PM", "02:00 PM"),
        (Day::Monday, "11:00 AM", "12:00 PM"),
        (Day::Sunday, "12:00 PM", "01:00 PM"),
    ] {
        SlotFactory::new(db, &lawyer.id)
            .day(day)
            .time(start, end)
            .build()
            .await?;
    }

    let slots = SlotRepository::new(db).get_by_lawyer(&lawyer.id).await?;
    let order: Vec<(Day, &str)> = slots
        .iter()
        .map(|s| (s.day, s.start_time.as_str()))
        .collect();

    assert_eq!(
        order,
        vec![
            (Day::Sunday, "12:00 PM"),
            (Day::Monday, "11:00 AM"),
            (Day::Monday, "01:00 PM"),
            (Day::Tuesday, "09:00 AM"),
        ]
    );

    Ok(())
}

/// Tests listing the slots of one weekday.
///
/// Expected: Ok with only that day's slots
#[tokio::test]
async fn filters_by_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .with_table(entity::prelude::Slot)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let lawyer = factory::create_lawyer(db).await?;
    SlotFactory::new(db, &lawyer.id).day(Day::Monday).build().await?;
    SlotFactory::new(db, &lawyer.id)
        .day(Day::Wednesday)
        .status(SlotStatus::Booked)
        .build()
        .await?;

    let slots = SlotRepository::new(db)
        .get_by_lawyer_and_day(&lawyer.id, Day::Wednesday)
        .await?;

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].status, SlotStatus::Booked);

    Ok(())
}
