use super::*;
use test_utils::factory::message::MessageFactory;

/// Tests message totals split by moderation state.
///
/// Expected: Ok(MessageStats) with total equal to moderated plus unmoderated
#[tokio::test]
async fn splits_messages_by_moderation_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::user::create_user(db).await?;
    let now = Utc::now();

    MessageFactory::new(db, sender.id, None)
        .created_at(now)
        .build()
        .await?;
    MessageFactory::new(db, sender.id, None)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    MessageFactory::new(db, sender.id, None)
        .moderated(true)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let windows = ReportingWindows {
        today: now - Duration::hours(1),
        week: now - Duration::days(7),
        month: now - Duration::days(30),
    };
    let stats = AnalyticsRepository::new(db).message_stats(&windows).await?;

    assert_eq!(stats.total, 3);
    assert_eq!(stats.unmoderated, 2);
    assert_eq!(stats.moderated, 1);
    assert_eq!(stats.new_today, 1);

    Ok(())
}
