use super::*;

/// Tests creating a lawyer with qualifications.
///
/// Verifies that the qualifications round trip through the JSON column and that
/// new lawyers await verification.
///
/// Expected: Ok with an unverified lawyer and the given qualifications
#[tokio::test]
async fn creates_unverified_lawyer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Lawyer)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = LawyerRepository::new(db);
    let lawyer = repo
        .create(CreateLawyerParams {
            name: "Saul Goodman".to_string(),
            email: "saul@example.com".to_string(),
            password_hash: "hash".to_string(),
            phone: None,
            qualifications: vec!["LLB".to_string(), "LLM".to_string()],
            specialization: Some("Criminal".to_string()),
            experience: Some(12),
            bar_number: None,
            office_address: None,
            bio: None,
        })
        .await?;

    assert_eq!(lawyer.qualifications, vec!["LLB", "LLM"]);
    assert!(!lawyer.is_verified);
    assert!(repo.email_exists("saul@example.com").await?);

    let account = repo.find_account_by_email("saul@example.com").await?.unwrap();
    assert_eq!(account.id, lawyer.id);

    Ok(())
}
