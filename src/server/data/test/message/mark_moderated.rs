use super::*;

/// Tests marking a message removes it from the queue.
///
/// Expected: Ok(Some(Message)) with is_moderated true and an empty queue
#[tokio::test]
async fn marks_message_as_moderated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::user::create_user(db).await?;
    let message = factory::message::create_message(db, sender.id, None).await?;

    let repo = MessageRepository::new(db);
    let moderated = repo.mark_moderated(message.id).await?.unwrap();

    assert!(moderated.is_moderated);
    assert!(repo.get_pending().await?.is_empty());

    Ok(())
}

/// Tests marking an already moderated message is a no-op.
///
/// Expected: Ok(Some(Message)) still moderated
#[tokio::test]
async fn already_moderated_stays_moderated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::user::create_user(db).await?;
    let message = factory::message::MessageFactory::new(db, sender.id, None)
        .moderated(true)
        .build()
        .await?;

    let result = MessageRepository::new(db)
        .mark_moderated(message.id)
        .await?
        .unwrap();

    assert!(result.is_moderated);

    Ok(())
}

/// Tests marking a non-existent message.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_marketboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MessageRepository::new(db).mark_moderated(999).await?;

    assert!(result.is_none());

    Ok(())
}
