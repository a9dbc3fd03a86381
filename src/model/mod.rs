//! JSON data transfer objects exchanged with the admin panel.

pub mod analytics;
pub mod api;
pub mod lookup;
pub mod message;
pub mod product;
pub mod user;
