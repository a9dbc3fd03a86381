use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{lookup::LookupDto, user::UserSummaryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: i32,
    pub content: String,
    pub sender_id: i32,
    pub conversation_id: Option<i32>,
    pub is_moderated: bool,
    pub created_at: DateTime<Utc>,
}

/// Listing a conversation is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationProductDto {
    pub id: i32,
    pub title: String,
    pub category: Option<LookupDto>,
    pub server: Option<LookupDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDto {
    pub id: i32,
    pub participant_one_id: i32,
    pub participant_two_id: i32,
    /// `null` when the conversation has no listing or the listing was removed.
    pub product: Option<ConversationProductDto>,
}

/// Message awaiting review with its sender and conversation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingMessageDto {
    #[serde(flatten)]
    pub message: MessageDto,
    pub sender: Option<UserSummaryDto>,
    /// `null` when the conversation was removed.
    pub conversation: Option<ConversationDto>,
}
