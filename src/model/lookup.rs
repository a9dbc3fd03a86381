use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A category or game server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LookupDto {
    pub id: i32,
    pub name: String,
}
