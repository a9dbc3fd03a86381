use super::*;
use chrono::{Duration, Utc};

/// Tests search matches username, email and name case-insensitively.
///
/// Verifies that a mixed-case search string finds users through each of the three
/// searchable columns and skips users matching none of them.
///
/// Expected: Ok with the three matching users
#[tokio::test]
async fn searches_username_email_and_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_username = factory::user::UserFactory::new(db)
        .username("fisherking")
        .build()
        .await?;
    let by_email = factory::user::UserFactory::new(db)
        .email("pro.FISHER@example.com")
        .build()
        .await?;
    let by_name = factory::user::UserFactory::new(db)
        .name("Old Fisher Joe")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("carseller")
        .name("Car Seller")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo
        .get_filtered(&GetUsersParam {
            search: Some("FiShEr".to_string()),
            ..Default::default()
        })
        .await?;

    let mut ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    ids.sort();
    assert_eq!(ids, vec![by_username.id, by_email.id, by_name.id]);

    Ok(())
}

/// Tests the role filter matches the role exactly.
///
/// Expected: Ok with only the moderators
#[tokio::test]
async fn filters_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    let moderator = factory::user::create_user_with_role(db, "moderator").await?;
    factory::user::create_user_with_role(db, "admin").await?;

    let users = UserRepository::new(db)
        .get_filtered(&GetUsersParam {
            role: Some(UserRole::Moderator),
            ..Default::default()
        })
        .await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, moderator.id);
    assert_eq!(users[0].role, UserRole::Moderator);

    Ok(())
}

/// Tests the ban state filter.
///
/// Verifies that `Banned` returns only banned users, `Active` only unbanned users and
/// `All` both.
///
/// Expected: Ok with partitions of the user set
#[tokio::test]
async fn filters_by_ban_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::user::create_user(db).await?;
    let banned = factory::user::UserFactory::new(db)
        .banned("fraud")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let filter = |status| GetUsersParam {
        status,
        ..Default::default()
    };

    let banned_users = repo.get_filtered(&filter(BanStatusFilter::Banned)).await?;
    assert_eq!(banned_users.len(), 1);
    assert_eq!(banned_users[0].id, banned.id);
    assert_eq!(banned_users[0].ban_reason.as_deref(), Some("fraud"));

    let active_users = repo.get_filtered(&filter(BanStatusFilter::Active)).await?;
    assert_eq!(active_users.len(), 1);
    assert_eq!(active_users[0].id, active.id);

    let all_users = repo.get_filtered(&filter(BanStatusFilter::All)).await?;
    assert_eq!(all_users.len(), 2);

    Ok(())
}

/// Tests users are returned newest first.
///
/// Expected: Ok with users in descending creation order
#[tokio::test]
async fn orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::user::UserFactory::new(db)
        .created_at(now - Duration::days(3))
        .build()
        .await?;
    let newest = factory::user::UserFactory::new(db)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::user::UserFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let users = UserRepository::new(db)
        .get_filtered(&GetUsersParam::default())
        .await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests a stored role outside the known set is reported as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn unknown_stored_role_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "superuser").await?;

    let result = UserRepository::new(db)
        .get_filtered(&GetUsersParam::default())
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

/// Tests `_` and `%` in the search string match only themselves.
///
/// Verifies that `john_` does not match `johnx` and that `50%` does not match `500`.
///
/// Expected: Ok with only the users containing the literal characters
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let john_underscore = factory::user::UserFactory::new(db)
        .username("john_doe")
        .email("jd@example.com")
        .name("John Doe")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("johnx")
        .email("jx@example.com")
        .name("John X")
        .build()
        .await?;
    let fifty_percent = factory::user::UserFactory::new(db)
        .username("trader")
        .email("trader@example.com")
        .name("50% Off Trader")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("bulk")
        .email("bulk@example.com")
        .name("500 Ores Bulk")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let search = |term: &str| GetUsersParam {
        search: Some(term.to_string()),
        ..Default::default()
    };

    let users = repo.get_filtered(&search("john_")).await?;
    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![john_underscore.id]
    );

    let users = repo.get_filtered(&search("50%")).await?;
    assert_eq!(
        users.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![fifty_percent.id]
    );

    Ok(())
}

/// Tests a lowercase non-ASCII search finds a capitalised non-ASCII name.
///
/// Expected: Ok with the user whose name starts with `É`
#[tokio::test]
async fn search_matches_non_ascii_capitals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let elodie = factory::user::UserFactory::new(db)
        .username("elo")
        .email("elo@example.com")
        .name("Élodie")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .username("eric")
        .email("eric@example.com")
        .name("Eric")
        .build()
        .await?;

    let users = UserRepository::new(db)
        .get_filtered(&GetUsersParam {
            search: Some("élo".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![elodie.id]);

    Ok(())
}
