use super::*;

/// Tests paginating clients.
///
/// Expected: Ok with the requested page and the total client count
#[tokio::test]
async fn returns_page_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();

    for _ in 0..5 {
        factory::create_client(db).await?;
    }

    let repo = ClientRepository::new(db);
    let (first, total) = repo.get_paginated(0, 2).await?;
    assert_eq!(first.len(), 2);
    assert_eq!(total, 5);

    let (last, _) = repo.get_paginated(2, 2).await?;
    assert_eq!(last.len(), 1);

    Ok(())
}

/// Tests paginating a subset of clients by id.
///
/// Expected: Ok with only the requested clients
#[tokio::test]
async fn restricts_to_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let wanted = factory::create_client(db).await?;
    factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let (clients, total) = repo
        .get_paginated_by_ids(vec![wanted.id.clone()], 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(clients[0].id, wanted.id);

    Ok(())
}
