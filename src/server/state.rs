//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the request handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::middleware::auth::JwtKeys;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `JwtKeys` holds the HMAC keys derived from the shared secret
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// The only shared resource between requests.
    pub db: DatabaseConnection,

    /// Keys used to verify bearer tokens.
    pub jwt: JwtKeys,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Keys derived from the JWT shared secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt: JwtKeys) -> Self {
        Self { db, jwt }
    }
}
