use chrono::{DateTime, Utc};

use crate::{
    model::message::{ConversationDto, ConversationProductDto, MessageDto, PendingMessageDto},
    server::model::{lookup::Lookup, user::UserSummary},
};

/// Chat message exchanged between two users.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub content: String,
    pub sender_id: i32,
    pub conversation_id: Option<i32>,
    pub is_moderated: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            sender_id: entity.sender_id,
            conversation_id: entity.conversation_id,
            is_moderated: entity.is_moderated,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            content: self.content,
            sender_id: self.sender_id,
            conversation_id: self.conversation_id,
            is_moderated: self.is_moderated,
            created_at: self.created_at,
        }
    }
}

/// Listing a conversation refers to, with its category and server.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationProduct {
    pub id: i32,
    pub title: String,
    pub category: Option<Lookup>,
    pub server: Option<Lookup>,
}

impl ConversationProduct {
    pub fn into_dto(self) -> ConversationProductDto {
        ConversationProductDto {
            id: self.id,
            title: self.title,
            category: self.category.map(Lookup::into_dto),
            server: self.server.map(Lookup::into_dto),
        }
    }
}

/// Conversation a pending message belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationContext {
    pub id: i32,
    pub participant_one_id: i32,
    pub participant_two_id: i32,
    pub product: Option<ConversationProduct>,
}

impl ConversationContext {
    pub fn into_dto(self) -> ConversationDto {
        ConversationDto {
            id: self.id,
            participant_one_id: self.participant_one_id,
            participant_two_id: self.participant_two_id,
            product: self.product.map(ConversationProduct::into_dto),
        }
    }
}

/// Unmoderated message with its sender and conversation context.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMessage {
    pub message: Message,
    pub sender: Option<UserSummary>,
    pub conversation: Option<ConversationContext>,
}

impl PendingMessage {
    pub fn into_dto(self) -> PendingMessageDto {
        PendingMessageDto {
            message: self.message.into_dto(),
            sender: self.sender.map(UserSummary::into_dto),
            conversation: self.conversation.map(ConversationContext::into_dto),
        }
    }
}
