use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::product::ProductFactory;

/// Tests pending listings are joined with owner, category and server.
///
/// Expected: Ok with the listing and all three relations populated
#[tokio::test]
async fn joins_owner_category_and_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, server, product) =
        factory::helpers::create_product_with_dependencies(db).await?;

    let pending = ProductRepository::new(db)
        .get_pending(&GetPendingProductsParam::default())
        .await?;

    assert_eq!(pending.len(), 1);
    let entry = &pending[0];
    assert_eq!(entry.product.id, product.id);
    assert_eq!(entry.product.status, ProductStatus::Pending);

    let joined_owner = entry.owner.as_ref().unwrap();
    assert_eq!(joined_owner.id, owner.id);
    assert_eq!(joined_owner.username, owner.username);
    assert_eq!(joined_owner.name, owner.name);
    assert_eq!(entry.category.as_ref().unwrap().name, category.name);
    assert_eq!(entry.server.as_ref().unwrap().name, server.name);

    Ok(())
}

/// Tests only pending listings are returned, newest first.
///
/// Expected: Ok with the two pending listings in descending creation order
#[tokio::test]
async fn returns_only_pending_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db).await?;
    let server = factory::server::create_server(db).await?;
    let now = Utc::now();

    let older = ProductFactory::new(db, owner.id, category.id, server.id)
        .created_at(now - Duration::hours(5))
        .build()
        .await?;
    let newer = ProductFactory::new(db, owner.id, category.id, server.id)
        .created_at(now)
        .build()
        .await?;
    ProductFactory::new(db, owner.id, category.id, server.id)
        .status("approved")
        .build()
        .await?;
    ProductFactory::new(db, owner.id, category.id, server.id)
        .status("rejected")
        .build()
        .await?;

    let pending = ProductRepository::new(db)
        .get_pending(&GetPendingProductsParam::default())
        .await?;

    let ids: Vec<i32> = pending.iter().map(|p| p.product.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests the category and server filters narrow the queue.
///
/// Expected: Ok with only listings matching both filters
#[tokio::test]
async fn filters_by_category_and_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let cars = factory::category::create_category_named(db, "Cars").await?;
    let fish = factory::category::create_category_named(db, "Fish").await?;
    let alpha = factory::server::create_server_named(db, "Alpha").await?;
    let beta = factory::server::create_server_named(db, "Beta").await?;

    let target = factory::product::create_product(db, owner.id, cars.id, alpha.id).await?;
    factory::product::create_product(db, owner.id, cars.id, beta.id).await?;
    factory::product::create_product(db, owner.id, fish.id, alpha.id).await?;

    let repo = ProductRepository::new(db);

    let by_category = repo
        .get_pending(&GetPendingProductsParam {
            category_id: Some(cars.id),
            server_id: None,
        })
        .await?;
    assert_eq!(by_category.len(), 2);
    assert!(by_category.iter().all(|p| p.product.category_id == cars.id));

    let by_both = repo
        .get_pending(&GetPendingProductsParam {
            category_id: Some(cars.id),
            server_id: Some(alpha.id),
        })
        .await?;
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].product.id, target.id);

    Ok(())
}

/// Tests an empty queue.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_nothing_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = ProductRepository::new(db)
        .get_pending(&GetPendingProductsParam::default())
        .await?;

    assert!(pending.is_empty());

    Ok(())
}
