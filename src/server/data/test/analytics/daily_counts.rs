use super::*;
use chrono::DateTime;
use test_utils::factory::{message::MessageFactory, product::ProductFactory, user::UserFactory};

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

fn boundaries() -> Vec<DateTime<Utc>> {
    vec![
        at("2026-10-12T00:00:00Z"),
        at("2026-10-13T00:00:00Z"),
        at("2026-10-14T00:00:00Z"),
        at("2026-10-15T00:00:00Z"),
    ]
}

/// Tests users are counted per half-open day interval.
///
/// Verifies that a row at a boundary belongs to the interval it starts, that the last
/// second of a day stays in that day and that rows outside all intervals are dropped.
///
/// Expected: Ok with one count per interval
#[tokio::test]
async fn counts_users_per_interval() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for created_at in [
        "2026-10-11T23:59:59Z",
        "2026-10-12T00:00:00Z",
        "2026-10-13T23:59:59Z",
        "2026-10-14T00:00:00Z",
        "2026-10-14T18:00:00Z",
        "2026-10-15T00:00:00Z",
    ] {
        UserFactory::new(db).created_at(at(created_at)).build().await?;
    }

    let counts = AnalyticsRepository::new(db)
        .user_daily_counts(&boundaries())
        .await?;

    assert_eq!(counts, vec![1, 1, 2]);

    Ok(())
}

/// Tests listings and messages are counted per interval, with empty days as 0.
///
/// Expected: Ok with zero-filled counts for intervals without rows
#[tokio::test]
async fn counts_products_and_messages_per_interval() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = UserFactory::new(db)
        .created_at(at("2026-01-01T00:00:00Z"))
        .build()
        .await?;
    let category = factory::category::create_category(db).await?;
    let server = factory::server::create_server(db).await?;

    for created_at in ["2026-10-12T08:00:00Z", "2026-10-12T09:00:00Z"] {
        ProductFactory::new(db, owner.id, category.id, server.id)
            .created_at(at(created_at))
            .build()
            .await?;
    }
    MessageFactory::new(db, owner.id, None)
        .created_at(at("2026-10-14T12:00:00Z"))
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);

    assert_eq!(repo.product_daily_counts(&boundaries()).await?, vec![2, 0, 0]);
    assert_eq!(repo.message_daily_counts(&boundaries()).await?, vec![0, 0, 1]);

    Ok(())
}

/// Tests a single interval needs no bucket expression.
///
/// Expected: Ok with every row in the interval counted once
#[tokio::test]
async fn counts_single_interval() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .created_at(at("2026-10-14T01:00:00Z"))
        .build()
        .await?;
    UserFactory::new(db)
        .created_at(at("2026-10-14T23:00:00Z"))
        .build()
        .await?;

    let counts = AnalyticsRepository::new(db)
        .user_daily_counts(&[at("2026-10-14T00:00:00Z"), at("2026-10-15T00:00:00Z")])
        .await?;

    assert_eq!(counts, vec![2]);

    Ok(())
}

/// Tests no boundaries yield no intervals.
///
/// Expected: Ok with an empty series
#[tokio::test]
async fn no_boundaries_yield_empty_series() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let counts = AnalyticsRepository::new(db).user_daily_counts(&[]).await?;

    assert!(counts.is_empty());

    Ok(())
}
