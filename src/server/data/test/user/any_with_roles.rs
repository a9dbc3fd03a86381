use super::*;

/// Tests detection of staff accounts.
///
/// Verifies that the check is false with only plain users and true once a moderator
/// exists.
///
/// Expected: Ok(false) then Ok(true)
#[tokio::test]
async fn detects_staff_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let staff = [UserRole::Admin, UserRole::Moderator];

    factory::user::create_user(db).await?;
    assert!(!repo.any_with_roles(&staff).await?);

    factory::user::create_user_with_role(db, "moderator").await?;
    assert!(repo.any_with_roles(&staff).await?);

    Ok(())
}
