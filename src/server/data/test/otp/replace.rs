use super::*;

/// Tests replacing an existing code.
///
/// Verifies that only the newest code is kept for an email.
///
/// Expected: Ok with a single stored code equal to the new one
#[tokio::test]
async fn keeps_only_latest_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db();
    factory::create_otp(db, "jane@example.com", "111111").await?;

    let repo = OtpRepository::new(db);
    repo.replace(
        "jane@example.com",
        "222222",
        Utc::now() + Duration::minutes(5),
    )
    .await?;

    let stored = repo.find_by_email("jane@example.com").await?.unwrap();
    assert_eq!(stored.code, "222222");

    let count = entity::prelude::Otp::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
