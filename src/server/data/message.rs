//! Message data repository.
//!
//! Provides the unmoderated message queue joined with sender, conversation and the
//! conversation's listing, plus the one-way moderation flag update.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::lookup::{unique_ids, LookupRepository},
    model::{
        message::{ConversationContext, ConversationProduct, Message, PendingMessage},
        user::UserSummary,
    },
};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets unmoderated messages with their context, oldest first.
    ///
    /// Senders, conversations, listings, categories and servers are each loaded with a
    /// single batched query. A message without a conversation, or a conversation without
    /// a listing, yields `None` for that part of the context.
    ///
    /// # Returns
    /// - `Ok(Vec<PendingMessage>)` - Unmoderated messages ordered by creation time ascending
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn get_pending(&self) -> Result<Vec<PendingMessage>, DbErr> {
        let messages = entity::prelude::Message::find()
            .filter(entity::message::Column::IsModerated.eq(false))
            .order_by_asc(entity::message::Column::CreatedAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?;

        if messages.is_empty() {
            return Ok(Vec::new());
        }

        let sender_ids = unique_ids(messages.iter().map(|m| m.sender_id));
        let senders: HashMap<i32, UserSummary> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(sender_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, UserSummary::from(user)))
            .collect();

        let conversation_ids = unique_ids(messages.iter().filter_map(|m| m.conversation_id));
        let conversations = self.conversations_by_ids(&conversation_ids).await?;

        let pending = messages
            .into_iter()
            .map(|entity| {
                let sender = senders.get(&entity.sender_id).cloned();
                let conversation = entity
                    .conversation_id
                    .and_then(|id| conversations.get(&id).cloned());

                PendingMessage {
                    message: Message::from_entity(entity),
                    sender,
                    conversation,
                }
            })
            .collect();

        Ok(pending)
    }

    /// Loads conversations with their listing context, keyed by conversation id.
    async fn conversations_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, ConversationContext>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let conversations = entity::prelude::Conversation::find()
            .filter(entity::conversation::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        let product_ids = unique_ids(conversations.iter().filter_map(|c| c.product_id));
        let products = if product_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Product::find()
                .filter(entity::product::Column::Id.is_in(product_ids))
                .all(self.db)
                .await?
        };

        let lookup_repo = LookupRepository::new(self.db);
        let categories = lookup_repo
            .categories_by_ids(&unique_ids(products.iter().map(|p| p.category_id)))
            .await?;
        let servers = lookup_repo
            .servers_by_ids(&unique_ids(products.iter().map(|p| p.server_id)))
            .await?;

        let products: HashMap<i32, ConversationProduct> = products
            .into_iter()
            .map(|product| {
                let context = ConversationProduct {
                    id: product.id,
                    title: product.title,
                    category: categories.get(&product.category_id).cloned(),
                    server: servers.get(&product.server_id).cloned(),
                };
                (product.id, context)
            })
            .collect();

        Ok(conversations
            .into_iter()
            .map(|conversation| {
                let context = ConversationContext {
                    id: conversation.id,
                    participant_one_id: conversation.participant_one_id,
                    participant_two_id: conversation.participant_two_id,
                    product: conversation
                        .product_id
                        .and_then(|id| products.get(&id).cloned()),
                };
                (conversation.id, context)
            })
            .collect())
    }

    /// Marks a message as reviewed. The flag is never cleared again.
    ///
    /// # Returns
    /// - `Ok(Some(Message))` - The updated message
    /// - `Ok(None)` - No message with that id
    /// - `Err(DbErr)` - Database error during the lookup or update
    pub async fn mark_moderated(&self, message_id: i32) -> Result<Option<Message>, DbErr> {
        let Some(entity) = entity::prelude::Message::find_by_id(message_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if entity.is_moderated {
            return Ok(Some(Message::from_entity(entity)));
        }

        let mut active_model: entity::message::ActiveModel = entity.into();
        active_model.is_moderated = ActiveValue::Set(true);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Message::from_entity(entity)))
    }
}
