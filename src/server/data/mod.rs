//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database queries and updates for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the business logic layer independent of the schema. Joined records
//! are composed here by batch loading related rows by id.

pub mod analytics;
pub mod lookup;
pub mod message;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;
