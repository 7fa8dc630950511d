use super::*;
use test_utils::factory::lawyer::LawyerFactory;

/// Tests the public directory listing.
///
/// Verifies that unverified and blocked lawyers are hidden.
///
/// Expected: Ok with only verified, unblocked lawyers
#[tokio::test]
async fn lists_only_verified_unblocked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let visible = factory::create_lawyer(db).await?;
    LawyerFactory::new(db).verified(false).build().await?;
    LawyerFactory::new(db).blocked(true).build().await?;

    let lawyers = LawyerRepository::new(db).get_public(100).await?;

    assert_eq!(lawyers.len(), 1);
    assert_eq!(lawyers[0].id, visible.id);

    Ok(())
}
