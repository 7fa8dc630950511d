use super::*;

/// Tests deleting the code of an email.
///
/// Expected: Ok and no code remains for that email
#[tokio::test]
async fn deletes_code_for_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Otp)
        .build()
        .await
        .unwrap();
    let db = test.db();
    factory::create_otp(db, "jane@example.com", "111111").await?;
    factory::create_otp(db, "john@example.com", "333333").await?;

    let repo = OtpRepository::new(db);
    repo.delete("jane@example.com").await?;

    assert!(repo.find_by_email("jane@example.com").await?.is_none());
    assert!(repo.find_by_email("john@example.com").await?.is_some());

    Ok(())
}
