// Shared by multiple integration test binaries; not every helper is used in
// each binary.
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use factoryos_api::auth::jwt::{generate_access_token, JwtConfig};
use factoryos_api::config::ServerConfig;
use factoryos_api::router::build_app_router;
use factoryos_api::state::AppState;
use factoryos_core::registry::ThemeRegistry;
use factoryos_events::EventBus;

/// Signing secret shared by the test app and minted tokens.
pub const TEST_JWT_SECRET: &str = "integration-test-secret-long-enough-for-hmac";

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 15,
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: jwt_config(),
    }
}

/// Build the full application router with all middleware layers and a fresh,
/// system-seeded theme registry.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app() -> Router {
    let config = test_config();

    let state = AppState {
        registry: Arc::new(RwLock::new(ThemeRegistry::new())),
        config: Arc::new(config.clone()),
        event_bus: Arc::new(EventBus::default()),
    };

    build_app_router(state, &config)
}

/// Mint a valid access token for the given role (and optional tenant).
pub fn token_for(role: &str, tenant_id: Option<&str>) -> String {
    generate_access_token("test-user", role, tenant_id, &jwt_config())
        .expect("test token generation should succeed")
}

/// Issue a request against the app, optionally authenticated and with a
/// JSON body.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    request(app, Method::GET, uri, token, None).await
}

pub async fn post(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    request(app, Method::DELETE, uri, token, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
