#![allow(dead_code)]

//! Test infrastructure for sk-server API tests

use sk_auth::{LoginRateLimiter, RateLimitConfig, TokenService, hash_password};
use sk_config::PaginationConfig;
use sk_core::{NewUser, User};
use sk_server::{AppState, build_router};

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";
pub const TEST_TOKEN_TTL: Duration = Duration::from_secs(3600);
pub const TEST_PASSWORD: &str = "password123";

/// Create a test pool with in-memory SQLite.
/// One connection, since every `:memory:` connection is its own database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sk_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing: 5 login attempts per 15 minutes, default paging
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState::new(
        pool,
        TokenService::with_hs256(TEST_JWT_SECRET, TEST_TOKEN_TTL),
        LoginRateLimiter::new(RateLimitConfig {
            max_attempts: 5,
            window: Duration::from_secs(900),
        }),
        PaginationConfig::default(),
    )
}

pub async fn create_test_app() -> (AppState, Router) {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());
    (state, app)
}

/// Insert a user directly through the repository
pub async fn create_test_user(state: &AppState, name: &str, email: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("Failed to hash password");

    state
        .users
        .create(&NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await
        .expect("Failed to create test user")
}

/// Insert a user without a usable password; for listing tests
pub async fn create_listed_user(state: &AppState, name: &str, email: &str) -> User {
    state
        .users
        .create(&NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
        })
        .await
        .expect("Failed to create test user")
}

pub fn bearer_token(state: &AppState, user: &User) -> String {
    state
        .tokens
        .issue(user.id, &user.email)
        .expect("Failed to issue token")
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request and decode the JSON body (Null when empty)
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };

    (status, json)
}
