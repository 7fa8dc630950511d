use super::*;
use test_utils::factory::lawyer::LawyerFactory;

/// Tests filtering lawyers by verification and block state.
///
/// Expected: Ok with each filter returning only its lawyers
#[tokio::test]
async fn filters_by_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let verified = factory::create_lawyer(db).await?;
    let pending = LawyerFactory::new(db).verified(false).build().await?;
    let blocked = LawyerFactory::new(db).blocked(true).build().await?;

    let repo = LawyerRepository::new(db);

    let (lawyers, total) = repo
        .get_paginated(0, 10, Some(LawyerFilter::Verified))
        .await?;
    assert_eq!(total, 1);
    assert_eq!(lawyers[0].id, verified.id);

    let (lawyers, _) = repo
        .get_paginated(0, 10, Some(LawyerFilter::NotVerified))
        .await?;
    assert_eq!(lawyers[0].id, pending.id);

    let (lawyers, _) = repo
        .get_paginated(0, 10, Some(LawyerFilter::Blocked))
        .await?;
    assert_eq!(lawyers[0].id, blocked.id);

    let (_, total) = repo.get_paginated(0, 10, None).await?;
    assert_eq!(total, 3);

    Ok(())
}
