//! Message factory for creating test message entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages with customizable fields.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    sender_id: i32,
    conversation_id: Option<i32>,
    content: String,
    is_moderated: bool,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Message {id}"`
    /// - is_moderated: `false`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, sender_id: i32, conversation_id: Option<i32>) -> Self {
        Self {
            db,
            sender_id,
            conversation_id,
            content: format!("Message {}", next_id()),
            is_moderated: false,
            created_at: Utc::now(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn moderated(mut self, is_moderated: bool) -> Self {
        self.is_moderated = is_moderated;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the message into the database.
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            content: ActiveValue::Set(self.content),
            sender_id: ActiveValue::Set(self.sender_id),
            conversation_id: ActiveValue::Set(self.conversation_id),
            is_moderated: ActiveValue::Set(self.is_moderated),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unmoderated message with default values.
pub async fn create_message(
    db: &DatabaseConnection,
    sender_id: i32,
    conversation_id: Option<i32>,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, sender_id, conversation_id)
        .build()
        .await
}
