use super::*;

/// Tests finding slots by day and start time.
///
/// Expected: Ok with only slots matching both a day and a start time
#[tokio::test]
async fn matches_day_and_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .with_table(entity::prelude::Slot)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let lawyer = factory::create_lawyer(db).await?;
    let other = factory::create_lawyer(db).await?;

    let wanted = SlotFactory::new(db, &lawyer.id)
        .day(Day::Monday)
        .time("09:00 AM", "10:00 AM")
        .build()
        .await?;
    SlotFactory::new(db, &lawyer.id)
        .day(Day::Monday)
        .time("10:00 AM", "11:00 AM")
        .build()
        .await?;
    SlotFactory::new(db, &lawyer.id)
        .day(Day::Thursday)
        .time("09:00 AM", "10:00 AM")
        .build()
        .await?;
    SlotFactory::new(db, &other.id)
        .day(Day::Monday)
        .time("09:00 AM", "10:00 AM")
        .build()
        .await?;

    let slots = SlotRepository::new(db)
        .find_matching(&lawyer.id, &[Day::Monday], &["09:00 AM".to_string()])
        .await?;

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].id, wanted.id);

    Ok(())
}
