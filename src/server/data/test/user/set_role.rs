use super::*;

/// Tests promoting a user to moderator.
///
/// Expected: Ok(Some(User)) with the new role persisted
#[tokio::test]
async fn updates_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(user.id, UserRole::Moderator).await?.unwrap();

    assert_eq!(updated.role, UserRole::Moderator);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.role, UserRole::Moderator);

    Ok(())
}

/// Tests changing the role keeps the ban state untouched.
///
/// Expected: Ok(Some(User)) still banned with the same reason
#[tokio::test]
async fn keeps_ban_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .banned("spam")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .set_role(user.id, UserRole::Admin)
        .await?
        .unwrap();

    assert!(updated.is_banned);
    assert_eq!(updated.ban_reason.as_deref(), Some("spam"));

    Ok(())
}

/// Tests setting the role of a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .set_role(999, UserRole::Admin)
        .await?;

    assert!(result.is_none());

    Ok(())
}
