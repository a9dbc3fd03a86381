//! Conversation factory for creating test conversation entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating conversations between two existing users.
pub struct ConversationFactory<'a> {
    db: &'a DatabaseConnection,
    participant_one_id: i32,
    participant_two_id: i32,
    product_id: Option<i32>,
}

impl<'a> ConversationFactory<'a> {
    /// Creates a new ConversationFactory not attached to any listing.
    pub fn new(db: &'a DatabaseConnection, participant_one_id: i32, participant_two_id: i32) -> Self {
        Self {
            db,
            participant_one_id,
            participant_two_id,
            product_id: None,
        }
    }

    /// Sets the listing the conversation is about.
    pub fn product_id(mut self, product_id: Option<i32>) -> Self {
        self.product_id = product_id;
        self
    }

    /// Builds and inserts the conversation into the database.
    pub async fn build(self) -> Result<entity::conversation::Model, DbErr> {
        entity::conversation::ActiveModel {
            participant_one_id: ActiveValue::Set(self.participant_one_id),
            participant_two_id: ActiveValue::Set(self.participant_two_id),
            product_id: ActiveValue::Set(self.product_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a conversation between two users without a listing.
pub async fn create_conversation(
    db: &DatabaseConnection,
    participant_one_id: i32,
    participant_two_id: i32,
) -> Result<entity::conversation::Model, DbErr> {
    ConversationFactory::new(db, participant_one_id, participant_two_id)
        .build()
        .await
}
