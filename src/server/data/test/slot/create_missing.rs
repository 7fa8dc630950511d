use super::*;

/// Tests that existing slots are skipped.
///
/// Verifies that a start time already present on the same day is not inserted
/// again while new times and other days are.
///
/// Expected: Ok(2) with three slots stored in total
#[tokio::test]
async fn skips_existing_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .with_table(entity::prelude::Slot)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let lawyer = factory::create_lawyer(db).await?;
    SlotFactory::new(db, &lawyer.id)
        .day(Day::Monday)
        .time("09:00 AM", "10:00 AM")
        .build()
        .await?;

    let repo = SlotRepository::new(db);
    let inserted = repo
        .create_missing(
            &lawyer.id,
            vec![
                slot_params(&lawyer.id, Day::Monday, "09:00 AM", "10:00 AM"),
                slot_params(&lawyer.id, Day::Monday, "11:00 AM", "12:00 PM"),
                slot_params(&lawyer.id, Day::Tuesday, "09:00 AM", "10:00 AM"),
            ],
        )
        .await?;

    assert_eq!(inserted, 2);
    assert_eq!(repo.get_by_lawyer(&lawyer.id).await?.len(), 3);

    Ok(())
}

/// Tests that duplicates inside one request are inserted once.
///
/// Expected: Ok(1)
#[tokio::test]
async fn deduplicates_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .with_table(entity::prelude::Slot)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let lawyer = factory::create_lawyer(db).await?;

    let inserted = SlotRepository::new(db)
        .create_missing(
            &lawyer.id,
            vec![
                slot_params(&lawyer.id, Day::Friday, "02:00 PM", "03:00 PM"),
                slot_params(&lawyer.id, Day::Friday, "02:00 PM", "03:00 PM"),
            ],
        )
        .await?;

    assert_eq!(inserted, 1);

    Ok(())
}
