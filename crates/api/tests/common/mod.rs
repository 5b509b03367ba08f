//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`,
//! no TCP listener involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mediatheque_api::auth::jwt::{generate_access_token, JwtConfig};
use mediatheque_api::config::ServerConfig;
use mediatheque_api::router::build_app_router;
use mediatheque_api::state::AppState;
use mediatheque_core::roles::{ROLE_READER, ROLE_STAFF};
use mediatheque_db::models::book::{Book, CreateBook};
use mediatheque_db::models::user::{CreateUser, User};
use mediatheque_db::repositories::{BookRepo, UserRepo};

/// Role ids as seeded by the first migration.
pub const ROLE_ID_ADMIN: i64 = 1;
pub const ROLE_ID_STAFF: i64 = 2;
pub const ROLE_ID_READER: i64 = 3;
pub const ROLE_ID_LISTENER: i64 = 4;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        default_page_size: 10,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A bearer token for a staff member.
pub fn staff_token() -> String {
    token_for(1, ROLE_STAFF)
}

/// A bearer token for a reader (not allowed on back-office endpoints).
pub fn reader_token() -> String {
    token_for(2, ROLE_READER)
}

pub fn token_for(user_id: i64, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).expect("token generation")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the parsed body.
pub async fn expect_json(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_book(pool: &PgPool, title: &str, author: &str) -> Book {
    BookRepo::create(
        pool,
        &CreateBook {
            title: title.to_string(),
            author: Some(author.to_string()),
        },
    )
    .await
    .expect("book creation should succeed")
}

pub async fn create_user(pool: &PgPool, first: &str, last: &str, role_id: i64) -> User {
    let email = format!(
        "{}.{}@example.org",
        first.to_lowercase(),
        last.to_lowercase()
    );
    UserRepo::create(
        pool,
        &CreateUser {
            name: format!("{first} {last}"),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email,
            role_id,
        },
    )
    .await
    .expect("user creation should succeed")
}

pub async fn create_reader(pool: &PgPool, first: &str, last: &str) -> User {
    create_user(pool, first, last, ROLE_ID_READER).await
}
