use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{lookup::LookupDto, user::UserSummaryDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub category_id: i32,
    pub server_id: i32,
    pub owner_id: i32,
    /// One of `pending`, `approved` or `rejected`.
    pub status: String,
    pub moderation_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing awaiting review, joined with its owner, category and server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingProductDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub owner: Option<UserSummaryDto>,
    pub category: Option<LookupDto>,
    pub server: Option<LookupDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetProductStatusDto {
    pub status: String,
    #[serde(default)]
    pub note: Option<String>,
}
