use std::time::Duration;

use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{authorize, AuthContext, AuthGuard, JwtKeys, Permission},
    model::user::UserRole,
};
use test_utils::{builder::TestBuilder, factory};


const SECRET: &str = "test-secret";

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn token_for(keys: &JwtKeys, user_id: i32) -> String {
    keys.issue(user_id, Duration::from_secs(3600)).unwrap()
}
