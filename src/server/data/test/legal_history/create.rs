use super::*;

fn record(client_id: &str, title: &str, date: NaiveDate) -> CreateLegalHistoryParams {
    CreateLegalHistoryParams {
        client_id: client_id.to_string(),
        title: title.to_string(),
        case_type: "Property".to_string(),
        description: "Boundary dispute with neighbour".to_string(),
        date,
        status: "open".to_string(),
        documents: vec!["deed.pdf".to_string()],
    }
}

/// Tests creating and listing case history.
///
/// Verifies that documents survive the JSON column and that records are listed
/// newest case date first for both the client and the lawyer.
///
/// Expected: Ok with two records in date order
#[tokio::test]
async fn creates_and_lists_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .with_table(entity::prelude::Lawyer)
        .with_table(entity::prelude::LegalHistory)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let client = factory::create_client(db).await?;
    let lawyer = factory::create_lawyer(db).await?;

    let repo = LegalHistoryRepository::new(db);
    let created = repo
        .create(
            &lawyer.id,
            record(&client.id, "Filing", NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()),
        )
        .await?;
    repo.create(
        &lawyer.id,
        record(&client.id, "Hearing", NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()),
    )
    .await?;

    assert_eq!(created.documents, vec!["deed.pdf"]);

    let (records, total) = repo
        .get_paginated(entity::legal_history::Column::ClientId, &client.id, 0, 10)
        .await?;
    assert_eq!(total, 2);
    assert_eq!(records[0].title, "Hearing");

    let (_, total) = repo
        .get_paginated(entity::legal_history::Column::LawyerId, &lawyer.id, 0, 10)
        .await?;
    assert_eq!(total, 2);

    Ok(())
}
