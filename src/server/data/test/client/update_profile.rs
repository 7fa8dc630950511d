use super::*;

/// Tests a partial profile update.
///
/// Verifies that provided fields change and omitted fields keep their value.
///
/// Expected: Ok(Some) with the merged profile
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let client = factory::create_client(db).await?;

    let updated = ClientRepository::new(db)
        .update_profile(
            &client.id,
            UpdateClientProfileParams {
                occupation: Some("Engineer".to_string()),
                gender: Some("Female".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.occupation.as_deref(), Some("Engineer"));
    assert_eq!(updated.gender.as_deref(), Some("Female"));
    assert_eq!(updated.name, client.name);
    assert_eq!(updated.address, client.address);

    Ok(())
}

/// Tests updating a missing client.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let result = ClientRepository::new(db)
        .update_profile("aaaaaaaaaaaaaaaaaaaaaaaa", UpdateClientProfileParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
