//! Integration and unit tests for the AEDB application.
//!
//! API tests drive the real router (`routes::router`) over an in-memory
//! SQLite database via `tower::ServiceExt::oneshot`, so they exercise the
//! same surface the binary serves - extractors, sessions, services and error
//! mapping included.
//!
//! ## Test Modules
//!
//! - **store_tests**: session lifecycle and generic data manager semantics
//! - **auth_api_tests**: signup/login/token flow
//! - **manuals_api_tests**: manuals CRUD, search, nested tree, protection
//! - **converters_api_tests**: inventory listing, pagination, deletes, seeding
//! - **posts_api_tests**: posts, menu, sensors and storage endpoints
//! - **health_api_tests**: health/readiness/version endpoints
//! - **error_tests**: error envelope and validation helpers
//! - **config_tests**: configuration loading and validation
//! - **db_tests**: schema initialization and constraint enforcement

pub mod auth_api_tests;
pub mod config_tests;
pub mod converters_api_tests;
pub mod error_tests;
pub mod manuals_api_tests;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;

use crate::config::{AppConfig, AuthConfig, DatabaseConfig, FixturesConfig, ServerConfig};
use crate::cover::Rasterizer;
use crate::state::AppState;

/// Rasterizer stub: returns a fixed byte marker instead of shelling out.
pub struct StubRasterizer;

#[async_trait]
impl Rasterizer for StubRasterizer {
    async fn first_page_png(&self, _pdf: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(b"png-stub".to_vec())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 8000 },
        database: DatabaseConfig { url: "sqlite::memory:".to_string() },
        auth: AuthConfig {
            token_key: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expire_minutes: 60,
        },
        fixtures: FixturesConfig { dir: "fixtures".to_string() },
        object_store: None,
    }
}

/// Fresh in-memory database with the full schema applied. A single pooled
/// connection keeps the in-memory database alive for the test's duration.
pub async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    crate::db::init_db(&pool).await.unwrap();
    AppState::new(pool, test_config(), None, Arc::new(StubRasterizer))
}

pub async fn setup_test_app() -> (Router, AppState) {
    let state = test_state().await;
    (crate::routes::router(state.clone()), state)
}

/// A valid `Authorization` header value for the given identity.
pub fn bearer_for(state: &AppState, name: &str, email: &str) -> String {
    let token = crate::auth::jwt::generate_access_token(name, email, &state.config.auth).unwrap();
    format!("Bearer {}", token)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_authed(uri: &str, bearer: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("authorization", bearer)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, bearer: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(bearer) = bearer {
        builder = builder.header("authorization", bearer);
    }
    builder.body(Body::from(serde_json::to_vec(&body).unwrap())).unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
