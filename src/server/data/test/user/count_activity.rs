use super::*;

/// Tests listing and message counts are grouped per user.
///
/// Verifies that each user's listings and messages are counted separately and that
/// users without activity are absent from the maps.
///
/// Expected: Ok with per-user counts
#[tokio::test]
async fn counts_products_and_messages_per_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::user::create_user(db).await?;
    let buyer = factory::user::create_user(db).await?;
    let idle = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let server = factory::server::create_server(db).await?;

    factory::product::create_product(db, seller.id, category.id, server.id).await?;
    factory::product::create_product(db, seller.id, category.id, server.id).await?;
    factory::message::create_message(db, buyer.id, None).await?;
    factory::message::create_message(db, buyer.id, None).await?;
    factory::message::create_message(db, seller.id, None).await?;

    let repo = UserRepository::new(db);
    let ids = vec![seller.id, buyer.id, idle.id];

    let products = repo.count_products_by_owner(&ids).await?;
    let messages = repo.count_messages_by_sender(&ids).await?;

    assert_eq!(products.get(&seller.id), Some(&2));
    assert_eq!(products.get(&buyer.id), None);
    assert_eq!(messages.get(&buyer.id), Some(&2));
    assert_eq!(messages.get(&seller.id), Some(&1));
    assert_eq!(messages.get(&idle.id), None);

    Ok(())
}

/// Tests counting for an empty id list skips the query.
///
/// Expected: Ok with empty maps
#[tokio::test]
async fn empty_id_list_returns_empty_map() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.count_products_by_owner(&[]).await?.is_empty());
    assert!(repo.count_messages_by_sender(&[]).await?.is_empty());

    Ok(())
}
