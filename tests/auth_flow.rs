//! Authentication API integration tests
//!
//! Signup, signin and token enforcement through the full router.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_signup_success() {
    let app = test_app();

    let body = json!({ "email": "a@x.com", "password": "pw123" });
    let (status, json) = send_json(&app, json_request("POST", "/api/auth/signup", &body, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!json["token"].as_str().unwrap().is_empty());
    assert!(json["user"]["id"].is_i64());
    assert_eq!(json["user"]["email"], "a@x.com");
    assert!(json["user"].get("password").is_none());
    assert!(json["user"].get("password_hash").is_none());
    assert_eq!(app.store.user_count().await, 1);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = test_app();
    signup_user(&app, "a@x.com", "pw123").await;

    let body = json!({ "email": "a@x.com", "password": "other-password" });
    let (status, json) = send_json(&app, json_request("POST", "/api/auth/signup", &body, None)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json.get("token").is_none());
    assert_eq!(app.store.user_count().await, 1);
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = test_app();

    for body in [
        json!({}),
        json!({ "email": "a@x.com" }),
        json!({ "password": "pw123" }),
        json!({ "email": "", "password": "pw123" }),
        json!({ "email": "a@x.com", "password": "" }),
    ] {
        let (status, json) =
            send_json(&app, json_request("POST", "/api/auth/signup", &body, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(json["error"].is_string());
    }

    assert_eq!(app.store.user_count().await, 0);
}

#[tokio::test]
async fn test_signup_rejects_non_json_body() {
    let app = test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/auth/signup")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("email=a@x.com&password=pw123"))
        .unwrap();
    let (status, _) = send_json(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.user_count().await, 0);
}

#[tokio::test]
async fn test_signup_rejects_overlong_password() {
    let app = test_app();

    let body = json!({ "email": "a@x.com", "password": "p".repeat(73) });
    let (status, _) = send_json(&app, json_request("POST", "/api/auth/signup", &body, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.user_count().await, 0);
}

#[tokio::test]
async fn test_signin_success() {
    let app = test_app();
    let user = signup_user(&app, "a@x.com", "pw123").await;

    let body = json!({ "email": "a@x.com", "password": "pw123" });
    let (status, json) = send_json(&app, json_request("POST", "/api/auth/signin", &body, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!json["token"].as_str().unwrap().is_empty());
    assert_eq!(json["user"]["id"].as_i64(), Some(user.id));
    assert_eq!(json["user"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_signin_failures_are_indistinguishable() {
    let app = test_app();
    signup_user(&app, "a@x.com", "pw123").await;

    let wrong_password = json!({ "email": "a@x.com", "password": "nope" });
    let (wrong_status, wrong_body) =
        send(&app, json_request("POST", "/api/auth/signin", &wrong_password, None)).await;

    let unknown_email = json!({ "email": "nobody@x.com", "password": "nope" });
    let (unknown_status, unknown_body) =
        send(&app, json_request("POST", "/api/auth/signin", &unknown_email, None)).await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_signin_missing_fields() {
    let app = test_app();

    let body = json!({ "email": "a@x.com" });
    let (status, _) = send_json(&app, json_request("POST", "/api/auth/signin", &body, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = test_app();

    let (status, json) = send_json(&app, raw_request("GET", "/api", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Unauthorized");

    let (status, _) = send_json(&app, raw_request("GET", "/api", Some("Bearer "))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(&app, raw_request("GET", "/api", Some("Bearer not.a.token"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_accepts_bearer_and_bare_token() {
    let app = test_app();
    let user = signup_unique_user(&app).await;

    let bearer = auth_header(&user.token);
    let (status, json) = send_json(&app, raw_request("GET", "/api", Some(&bearer))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "hello");
    assert_eq!(json["user_id"].as_i64(), Some(user.id));

    let (status, json) = send_json(&app, raw_request("GET", "/api", Some(&user.token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user_id"].as_i64(), Some(user.id));
}

#[tokio::test]
async fn test_token_from_another_secret_is_rejected() {
    let app = test_app();
    let user = signup_unique_user(&app).await;

    let foreign = futurama_favorites::backend::auth::TokenCodec::new(
        b"some-other-secret-value",
        app.config.token_ttl,
    )
    .issue(user.id as i32)
    .unwrap();

    let (status, _) = send_json(&app, raw_request("GET", "/api", Some(&auth_header(&foreign)))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signin_token_and_signup_token_identify_same_user() {
    let app = test_app();
    let user = signup_user(&app, "fry@planetexpress.com", "slurm").await;

    let body = json!({ "email": user.email, "password": user.password });
    let (_, json) = send_json(&app, json_request("POST", "/api/auth/signin", &body, None)).await;
    let signin_token = json["token"].as_str().unwrap().to_string();

    for token in [&user.token, &signin_token] {
        let (status, json) = send_json(&app, raw_request("GET", "/api", Some(&auth_header(token)))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["user_id"].as_i64(), Some(user.id));
    }
}

#[tokio::test]
async fn test_auth_routes_do_not_require_token() {
    let app = test_app();

    let body = json!({ "email": "nobody@x.com", "password": "pw" });
    let (status, json) = send_json(&app, json_request("POST", "/api/auth/signin", &body, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Unauthorized");
}

#[tokio::test]
async fn test_unknown_api_path_is_gated() {
    let app = test_app();

    let (status, json) = send_json(&app, raw_request("GET", "/api/does-not-exist", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Unauthorized");

    let user = signup_unique_user(&app).await;
    let (status, json) = send_json(
        &app,
        raw_request("GET", "/api/does-not-exist", Some(&auth_header(&user.token))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = test_app();
    let user = signup_unique_user(&app).await;

    let ttl = app.config.token_ttl;
    let issued = chrono::Utc::now() - chrono::Duration::seconds(2 * ttl.as_secs() as i64);
    let expired = futurama_favorites::backend::auth::TokenCodec::new(TEST_SECRET.as_bytes(), ttl)
        .issue_at(user.id as i32, issued)
        .unwrap();

    let (status, json) = send_json(&app, raw_request("GET", "/api", Some(&auth_header(&expired)))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Unauthorized");
}
