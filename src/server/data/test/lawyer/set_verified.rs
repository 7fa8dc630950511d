use super::*;
use test_utils::factory::lawyer::LawyerFactory;

/// Tests verifying a lawyer.
///
/// Expected: Ok(true) and the lawyer is verified afterwards
#[tokio::test]
async fn verifies_lawyer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let lawyer = LawyerFactory::new(db).verified(false).build().await?;

    let repo = LawyerRepository::new(db);
    assert!(repo.set_verified(&lawyer.id, true).await?);

    assert!(repo.find_by_id(&lawyer.id).await?.unwrap().is_verified);

    Ok(())
}

/// Tests verifying a lawyer that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_lawyer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let updated = LawyerRepository::new(db)
        .set_verified("bbbbbbbbbbbbbbbbbbbbbbbb", true)
        .await?;

    assert!(!updated);

    Ok(())
}
