use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoleDistributionDto {
    pub user: u64,
    pub moderator: u64,
    pub admin: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsDto {
    pub total: u64,
    pub active: u64,
    pub banned: u64,
    pub new_today: u64,
    pub new_this_week: u64,
    pub new_this_month: u64,
    pub by_role: RoleDistributionDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NamedCountDto {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStatsDto {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub new_today: u64,
    pub by_category: Vec<NamedCountDto>,
    pub by_server: Vec<NamedCountDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageStatsDto {
    pub total: u64,
    pub unmoderated: u64,
    pub moderated: u64,
    pub new_today: u64,
}

/// Parallel per-day series, oldest day first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    pub dates: Vec<String>,
    pub users: Vec<u64>,
    pub products: Vec<u64>,
    pub messages: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDto {
    /// Effective range after falling back to `week` for unknown values.
    pub range: String,
    pub generated_at: DateTime<Utc>,
    pub users: UserStatsDto,
    pub products: ProductStatsDto,
    pub messages: MessageStatsDto,
    pub activity: ActivityDto,
}
