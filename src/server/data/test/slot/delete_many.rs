use super::*;

/// Tests deleting slots by id.
///
/// Expected: Ok with the number of deleted slots, others untouched
#[tokio::test]
async fn deletes_given_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .with_table(entity::prelude::Slot)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let lawyer = factory::create_lawyer(db).await?;
    let doomed = SlotFactory::new(db, &lawyer.id).day(Day::Monday).build().await?;
    SlotFactory::new(db, &lawyer.id).day(Day::Friday).build().await?;

    let repo = SlotRepository::new(db);
    assert_eq!(repo.delete_many(vec![doomed.id]).await?, 1);
    assert_eq!(repo.delete_many(Vec::new()).await?, 0);

    let remaining = repo.get_by_lawyer(&lawyer.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].day, Day::Friday);

    Ok(())
}
