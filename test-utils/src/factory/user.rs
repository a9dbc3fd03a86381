//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("trader")
///     .role("admin")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    name: String,
    role: String,
    ban_reason: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - email: `"user_{id}@example.com"`
    /// - name: `"User {id}"`
    /// - role: `"user"`
    /// - not banned
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            email: format!("user_{}@example.com", id),
            name: format!("User {}", id),
            role: "user".to_string(),
            ban_reason: None,
            created_at: Utc::now(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored role string. Not validated, so tests can seed corrupt rows.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Marks the user as banned with the given reason.
    pub fn banned(mut self, reason: impl Into<String>) -> Self {
        self.ban_reason = Some(reason.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            role: ActiveValue::Set(self.role),
            is_banned: ActiveValue::Set(self.ban_reason.is_some()),
            ban_reason: ActiveValue::Set(self.ban_reason),
            created_at: ActiveValue::Set(self.created_at),
            last_login_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the given role.
///
/// Shorthand for `UserFactory::new(db).role(role).build().await`.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
