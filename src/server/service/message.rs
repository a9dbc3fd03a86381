use sea_orm::DatabaseConnection;

use crate::server::{
    data::message::MessageRepository,
    error::AppError,
    middleware::auth::AuthContext,
    model::message::{Message, PendingMessage},
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets unmoderated messages with their conversation context, oldest first
    pub async fn get_pending(&self) -> Result<Vec<PendingMessage>, AppError> {
        Ok(MessageRepository::new(self.db).get_pending().await?)
    }

    /// Marks a message as reviewed.
    ///
    /// # Returns
    /// - `Ok(Message)` - The moderated message
    /// - `Err(AppError::NotFound)` - No message with that id
    pub async fn mark_moderated(
        &self,
        actor: &AuthContext,
        message_id: i32,
    ) -> Result<Message, AppError> {
        let message = MessageRepository::new(self.db)
            .mark_moderated(message_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Message {} not found", message_id)))?;

        tracing::info!("User {} moderated message {}", actor.user_id, message.id);

        Ok(message)
    }
}
