use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{middleware::auth::JwtKeys, router::router, state::AppState};
use test_utils::{builder::TestBuilder, factory};


const SECRET: &str = "controller-test-secret";

/// Router over the given database with a fixed JWT secret.
fn app(db: &DatabaseConnection) -> Router {
    router(Duration::from_secs(30)).with_state(AppState::new(db.clone(), JwtKeys::new(SECRET)))
}

fn token_for(user_id: i32) -> String {
    JwtKeys::new(SECRET)
        .issue(user_id, Duration::from_secs(3600))
        .unwrap()
}

/// Sends one request and returns the status with the parsed JSON body (`null` if empty).
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
