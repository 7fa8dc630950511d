use super::*;

fn params(email: &str) -> CreateClientParams {
    CreateClientParams {
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password_hash: Some("hash".to_string()),
        phone: None,
        profile_image: None,
        is_verified: false,
    }
}

/// Tests creating an unverified client.
///
/// Expected: Ok with an unverified, unblocked client without an address
#[tokio::test]
async fn creates_unverified_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = ClientRepository::new(db);
    let client = repo.create(params("jane@example.com")).await?;

    assert_eq!(client.id.len(), 24);
    assert!(!client.is_verified);
    assert!(!client.is_blocked);
    assert!(!client.has_complete_profile());

    let found = repo.find_by_email("jane@example.com").await?;
    assert_eq!(found.map(|c| c.id), Some(client.id));

    Ok(())
}

/// Tests creating an account without a password, as done by OAuth sign-in.
///
/// Expected: Ok with an account whose password hash is None
#[tokio::test]
async fn creates_client_without_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = ClientRepository::new(db);
    let client = repo
        .create(CreateClientParams {
            password_hash: None,
            is_verified: true,
            ..params("oauth@example.com")
        })
        .await?;

    let account = repo.find_account_by_id(&client.id).await?.unwrap();
    assert!(account.password_hash.is_none());
    assert!(account.is_verified);

    Ok(())
}

/// Tests that client emails are unique.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = ClientRepository::new(db);
    repo.create(params("jane@example.com")).await?;

    assert!(repo.create(params("jane@example.com")).await.is_err());

    Ok(())
}
