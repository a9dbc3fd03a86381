use super::*;
use test_utils::factory::product::ProductFactory;

/// Tests listing counts per status and grouping by category and server.
///
/// Verifies that categories and servers without listings are reported with a zero count
/// and that groups are ordered by count descending.
///
/// Expected: Ok(ProductStats) with matching counts and zero-count groups
#[tokio::test]
async fn counts_products_by_status_and_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let cars = factory::category::create_category_named(db, "Cars").await?;
    let fish = factory::category::create_category_named(db, "Fish").await?;
    factory::category::create_category_named(db, "Treasures").await?;
    let alpha = factory::server::create_server_named(db, "Alpha").await?;
    factory::server::create_server_named(db, "Beta").await?;

    let now = Utc::now();
    ProductFactory::new(db, owner.id, cars.id, alpha.id)
        .created_at(now)
        .build()
        .await?;
    ProductFactory::new(db, owner.id, cars.id, alpha.id)
        .status("approved")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    ProductFactory::new(db, owner.id, fish.id, alpha.id)
        .status("rejected")
        .created_at(now - Duration::days(2))
        .build()
        .await?;

    let windows = ReportingWindows {
        today: now - Duration::hours(1),
        week: now - Duration::days(7),
        month: now - Duration::days(30),
    };
    let stats = AnalyticsRepository::new(db).product_stats(&windows).await?;

    assert_eq!(stats.total, 3);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.approved, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.new_today, 1);

    let by_category: Vec<(&str, u64)> = stats
        .by_category
        .iter()
        .map(|c| (c.name.as_str(), c.count))
        .collect();
    assert_eq!(by_category, vec![("Cars", 2), ("Fish", 1), ("Treasures", 0)]);

    let by_server: Vec<(&str, u64)> = stats
        .by_server
        .iter()
        .map(|s| (s.name.as_str(), s.count))
        .collect();
    assert_eq!(by_server, vec![("Alpha", 3), ("Beta", 0)]);

    Ok(())
}
