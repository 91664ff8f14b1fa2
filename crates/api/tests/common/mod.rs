//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use cinebase_api::auth::jwt::{generate_access_token, JwtConfig};
use cinebase_api::auth::password::hash_password;
use cinebase_api::catalog::CatalogService;
use cinebase_api::config::ServerConfig;
use cinebase_api::poster::{DisabledPosterLookup, PosterConfig, PosterLookup};
use cinebase_api::router::build_app_router;
use cinebase_api::state::AppState;
use cinebase_db::models::user::CreateUser;
use cinebase_db::repositories::UserRepo;
use cinebase_graph::QueryEngine;

/// Signing secret shared by the test app and the token helpers.
pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
        poster: PosterConfig::disabled(),
    }
}

/// Build the full application router with poster lookups disabled.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_posters(pool, Arc::new(DisabledPosterLookup))
}

/// Build the full application router with the given poster lookup.
pub fn build_test_app_with_posters(pool: PgPool, posters: Arc<dyn PosterLookup>) -> Router {
    let config = test_config();
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        catalog: CatalogService::new(pool, posters),
        query_engine: QueryEngine::new(),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Auth helpers
// ---------------------------------------------------------------------------

/// Sign a token for an arbitrary user id and role.
pub fn token_for(user_id: i64, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).unwrap()
}

/// Insert an admin account and return a valid token for it.
pub async fn admin_token(pool: &PgPool) -> String {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: "admin@example.com".to_string(),
            password_hash: hash_password("admin-password").unwrap(),
            role: "admin".to_string(),
        },
    )
    .await
    .unwrap();
    token_for(user.id, &user.role)
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
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
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

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
