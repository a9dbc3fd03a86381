use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::product::{PendingProductDto, ProductDto},
    server::{
        error::{internal::InternalError, AppError},
        model::{lookup::Lookup, user::UserSummary},
    },
};

/// Moderation status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductStatus {
    Pending,
    Approved,
    Rejected,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a request value, rejecting unknown statuses as a validation error on `status`.
    pub fn parse_field(value: &str) -> Result<Self, AppError> {
        value
            .parse()
            .map_err(|_| AppError::validation("status", value))
    }
}

impl FromStr for ProductStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(()),
        }
    }
}

/// Marketplace listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub category_id: i32,
    pub server_id: i32,
    pub owner_id: i32,
    pub status: ProductStatus,
    pub moderation_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Converts an entity model to a listing domain model.
    ///
    /// # Returns
    /// - `Ok(Product)` - The converted listing
    /// - `Err(InternalError::UnknownProductStatus)` - Stored status is not a known status
    pub fn from_entity(entity: entity::product::Model) -> Result<Self, InternalError> {
        let status = entity
            .status
            .parse()
            .map_err(|_| InternalError::UnknownProductStatus {
                product_id: entity.id,
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            price: entity.price,
            category_id: entity.category_id,
            server_id: entity.server_id,
            owner_id: entity.owner_id,
            status,
            moderation_note: entity.moderation_note,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            category_id: self.category_id,
            server_id: self.server_id,
            owner_id: self.owner_id,
            status: self.status.as_str().to_string(),
            moderation_note: self.moderation_note,
            created_at: self.created_at,
        }
    }
}

/// Pending listing joined with its owner, category and server.
///
/// Relations are optional so a dangling reference yields `None` instead of dropping the row.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingProduct {
    pub product: Product,
    pub owner: Option<UserSummary>,
    pub category: Option<Lookup>,
    pub server: Option<Lookup>,
}

impl PendingProduct {
    pub fn into_dto(self) -> PendingProductDto {
        PendingProductDto {
            product: self.product.into_dto(),
            owner: self.owner.map(UserSummary::into_dto),
            category: self.category.map(Lookup::into_dto),
            server: self.server.map(Lookup::into_dto),
        }
    }
}

/// Filters for the pending listing queue. `None` means all.
#[derive(Debug, Clone, Default)]
pub struct GetPendingProductsParam {
    pub category_id: Option<i32>,
    pub server_id: Option<i32>,
}

/// Parameters for a listing status transition.
#[derive(Debug, Clone)]
pub struct SetProductStatusParam {
    pub product_id: i32,
    pub status: ProductStatus,
    /// Replaces the stored moderation note; `None` clears it.
    pub note: Option<String>,
}
