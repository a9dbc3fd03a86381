//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a listing along with its owner, category and server.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Returns
/// - `Ok((owner, category, server, product))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::server::Model,
        entity::product::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let server = crate::factory::server::create_server(db).await?;
    let product =
        crate::factory::product::create_product(db, owner.id, category.id, server.id).await?;

    Ok((owner, category, server, product))
}

/// Creates a message inside a conversation about a freshly created listing.
///
/// Creates the listing (with owner, category and server), a second user who
/// sends the message, a conversation between the two and finally the message.
///
/// # Returns
/// - `Ok((sender, product, conversation, message))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_message_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::product::Model,
        entity::conversation::Model,
        entity::message::Model,
    ),
    DbErr,
> {
    let (owner, _, _, product) = create_product_with_dependencies(db).await?;
    let sender = crate::factory::user::create_user(db).await?;
    let conversation = crate::factory::conversation::ConversationFactory::new(db, sender.id, owner.id)
        .product_id(Some(product.id))
        .build()
        .await?;
    let message = crate::factory::message::create_message(db, sender.id, Some(conversation.id)).await?;

    Ok((sender, product, conversation, message))
}
