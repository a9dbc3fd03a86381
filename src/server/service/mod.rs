//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Turning missing records into `NotFound` and enforcing mutation rules
//! - **Orchestration**: Combining repository calls, concurrently where they are independent
//! - **Audit Logging**: Recording the acting identity of every mutation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod analytics;
pub mod lookup;
pub mod message;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;
