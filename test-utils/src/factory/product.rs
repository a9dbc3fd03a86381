//! Product factory for creating test listing entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// The owner, category and server must already exist.
///
/// # Example
///
/// ```rust,ignore
/// let product = ProductFactory::new(&db, owner.id, category.id, server.id)
///     .status("approved")
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    category_id: i32,
    server_id: i32,
    title: String,
    price: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Listing {id}"`
    /// - price: `1000`
    /// - status: `"pending"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, owner_id: i32, category_id: i32, server_id: i32) -> Self {
        Self {
            db,
            owner_id,
            category_id,
            server_id,
            title: format!("Listing {}", next_id()),
            price: 1000,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the stored status string. Not validated.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the listing into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Test listing".to_string()),
            price: ActiveValue::Set(self.price),
            category_id: ActiveValue::Set(self.category_id),
            server_id: ActiveValue::Set(self.server_id),
            owner_id: ActiveValue::Set(self.owner_id),
            status: ActiveValue::Set(self.status),
            moderation_note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending listing with default values.
pub async fn create_product(
    db: &DatabaseConnection,
    owner_id: i32,
    category_id: i32,
    server_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, owner_id, category_id, server_id)
        .build()
        .await
}
