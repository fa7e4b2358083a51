//! Common test utilities and helpers
//!
//! Builds the full router over an in-memory store and provides small
//! helpers for driving it with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use futurama_favorites::backend::routes::create_router;
use futurama_favorites::backend::search::SearchClient;
use futurama_favorites::backend::server::{AppState, ServerConfig};
use futurama_favorites::backend::store::MemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789";

/// Router plus a handle on the store behind it
pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub config: ServerConfig,
}

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub token: String,
}

pub fn test_config(futurama_api_url: &str) -> ServerConfig {
    let api_url = futurama_api_url.to_string();
    ServerConfig::from_lookup(move |key| match key {
        "JWT_SECRET" => Some(TEST_SECRET.to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        "FUTURAMA_API_URL" => Some(api_url.clone()),
        "STATIC_DIR" => Some("tests/fixtures/public".to_string()),
        _ => None,
    })
    .expect("test config should be valid")
}

/// Build an app whose search proxy points at `futurama_api_url`
pub fn test_app_with_upstream(futurama_api_url: &str) -> TestApp {
    let config = test_config(futurama_api_url);
    let store = MemoryStore::new();
    let search = SearchClient::new(config.futurama_api_url.clone()).expect("HTTP client");
    let state = AppState::new(&config, store.clone(), search).expect("app state");
    let router = create_router(state, &config.static_dir);

    TestApp {
        router,
        store,
        config,
    }
}

/// Build an app whose search proxy points at an unroutable address
pub fn test_app() -> TestApp {
    test_app_with_upstream("http://127.0.0.1:9")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn json_request(method: &str, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, auth_header(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn raw_request(method: &str, uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Send a request and return the status and raw body
pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// Send a request and parse the body as JSON
pub async fn send_json(app: &TestApp, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

/// Register a user through the HTTP API
pub async fn signup_user(app: &TestApp, email: &str, password: &str) -> TestUser {
    let body = serde_json::json!({ "email": email, "password": password });
    let (status, json) = send_json(app, json_request("POST", "/api/auth/signup", &body, None)).await;
    assert_eq!(status, StatusCode::OK, "signup failed: {json}");

    TestUser {
        id: json["user"]["id"].as_i64().unwrap(),
        email: json["user"]["email"].as_str().unwrap().to_string(),
        password: password.to_string(),
        token: json["token"].as_str().unwrap().to_string(),
    }
}

/// Register a user with a unique email
pub async fn signup_unique_user(app: &TestApp) -> TestUser {
    let email = format!("test_{}@example.com", uuid::Uuid::new_v4());
    signup_user(app, &email, "test_password_123").await
}
