//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data layer boundary,
//! services operate on them and controllers convert them into DTOs.

pub mod analytics;
pub mod lookup;
pub mod message;
pub mod product;
pub mod user;
