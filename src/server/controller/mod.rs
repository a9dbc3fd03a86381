//! HTTP request handlers.
//!
//! Each handler authenticates and authorizes through `AuthGuard` first, then parses and
//! validates its input, calls one service and converts the domain result into a DTO.

pub mod analytics;
pub mod health;
pub mod lookup;
pub mod message;
pub mod param;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;
