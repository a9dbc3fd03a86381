use super::*;
use test_utils::factory::user::UserFactory;

/// Tests user totals, ban split, windows and role distribution.
///
/// Verifies that sign-ups are counted against the fixed windows and that roles without
/// users report zero.
///
/// Expected: Ok(UserStats) with matching counts
#[tokio::test]
async fn counts_users_by_state_window_and_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let windows = ReportingWindows {
        today: now - Duration::hours(1),
        week: now - Duration::days(7),
        month: now - Duration::days(30),
    };

    UserFactory::new(db).created_at(now).build().await?;
    UserFactory::new(db)
        .created_at(now - Duration::days(3))
        .role("moderator")
        .build()
        .await?;
    UserFactory::new(db)
        .created_at(now - Duration::days(20))
        .banned("spam")
        .build()
        .await?;
    UserFactory::new(db)
        .created_at(now - Duration::days(90))
        .build()
        .await?;

    let stats = AnalyticsRepository::new(db).user_stats(&windows).await?;

    assert_eq!(stats.total, 4);
    assert_eq!(stats.banned, 1);
    assert_eq!(stats.active, 3);
    assert_eq!(stats.new_today, 1);
    assert_eq!(stats.new_this_week, 2);
    assert_eq!(stats.new_this_month, 3);
    assert_eq!(stats.by_role.user, 3);
    assert_eq!(stats.by_role.moderator, 1);
    assert_eq!(stats.by_role.admin, 0);

    Ok(())
}

/// Tests an empty user table.
///
/// Expected: Ok(UserStats) with every count zero
#[tokio::test]
async fn empty_table_counts_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let windows = ReportingWindows::at(&Utc, Utc::now());
    let stats = AnalyticsRepository::new(db).user_stats(&windows).await?;

    assert_eq!(stats.total, 0);
    assert_eq!(stats.active, 0);
    assert_eq!(stats.by_role.user, 0);

    Ok(())
}
