//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::create_user(db).await?;
//!
//! // Create a listing together with its owner, category and server
//! let (owner, category, server, product) =
//!     factory::helpers::create_product_with_dependencies(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let moderator = factory::user::UserFactory::new(db)
//!     .username("mod")
//!     .role("moderator")
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod conversation;
pub mod helpers;
pub mod message;
pub mod product;
pub mod server;
pub mod user;

pub use category::create_category;
pub use conversation::create_conversation;
pub use message::create_message;
pub use product::create_product;
pub use server::create_server;
pub use user::create_user;
