use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::{conversation::ConversationFactory, message::MessageFactory};

/// Tests a pending message carries sender, conversation and listing context.
///
/// Expected: Ok with the full context populated
#[tokio::test]
async fn joins_sender_conversation_and_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (sender, product, conversation, message) =
        factory::helpers::create_message_with_dependencies(db).await?;

    let pending = MessageRepository::new(db).get_pending().await?;

    assert_eq!(pending.len(), 1);
    let entry = &pending[0];
    assert_eq!(entry.message.id, message.id);
    assert_eq!(entry.sender.as_ref().unwrap().username, sender.username);

    let context = entry.conversation.as_ref().unwrap();
    assert_eq!(context.id, conversation.id);
    assert_eq!(context.participant_one_id, conversation.participant_one_id);
    assert_eq!(context.participant_two_id, conversation.participant_two_id);

    let listing = context.product.as_ref().unwrap();
    assert_eq!(listing.id, product.id);
    assert_eq!(listing.title, product.title);
    assert_eq!(listing.category.as_ref().unwrap().id, product.category_id);
    assert_eq!(listing.server.as_ref().unwrap().id, product.server_id);

    Ok(())
}

/// Tests missing relations yield `None` instead of an error.
///
/// Verifies that a message without conversation and a conversation without listing are
/// both returned.
///
/// Expected: Ok with conversation `None` and listing `None` respectively
#[tokio::test]
async fn missing_relations_are_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let conversation = ConversationFactory::new(db, sender.id, other.id)
        .build()
        .await?;

    let now = Utc::now();
    let orphan = MessageFactory::new(db, sender.id, None)
        .created_at(now - Duration::minutes(2))
        .build()
        .await?;
    let without_listing = MessageFactory::new(db, sender.id, Some(conversation.id))
        .created_at(now - Duration::minutes(1))
        .build()
        .await?;

    let pending = MessageRepository::new(db).get_pending().await?;

    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].message.id, orphan.id);
    assert!(pending[0].conversation.is_none());

    assert_eq!(pending[1].message.id, without_listing.id);
    let context = pending[1].conversation.as_ref().unwrap();
    assert!(context.product.is_none());

    Ok(())
}

/// Tests only unmoderated messages are returned, oldest first.
///
/// Expected: Ok with unmoderated messages in ascending creation order
#[tokio::test]
async fn returns_unmoderated_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::user::create_user(db).await?;
    let now = Utc::now();

    let newer = MessageFactory::new(db, sender.id, None)
        .created_at(now)
        .build()
        .await?;
    let older = MessageFactory::new(db, sender.id, None)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    MessageFactory::new(db, sender.id, None)
        .moderated(true)
        .build()
        .await?;

    let pending = MessageRepository::new(db).get_pending().await?;

    let ids: Vec<i32> = pending.iter().map(|m| m.message.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}
