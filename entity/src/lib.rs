//! SeaORM entities for the marketplace schema.

pub mod prelude;

pub mod category;
pub mod conversation;
pub mod message;
pub mod product;
pub mod server;
pub mod user;
