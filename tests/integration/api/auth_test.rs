//! Identity endpoint tests: register, login and the current-user lookup

use std::time::Duration;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use devconnect::backend::auth::TokenService;

use crate::common::{register_user, send, test_app, TEST_SECRET};
use crate::{assert_contains, assert_error_message, assert_status};

#[tokio::test]
async fn test_register_then_who_am_i() {
    let app = test_app();
    let user = register_user(&app, "Ann", "a@x.com", "secret1").await;

    let response = send(&app, Method::GET, "/api/auth", Some(&user.token), None).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["name"], "Ann");
    assert_eq!(response.body["email"], "a@x.com");
    assert_eq!(
        response.body["avatar"],
        "//www.gravatar.com/avatar/743173788aa9166801df2e18f0e7ff24?s=200&r=pg&d=mm"
    );
    assert!(response.body.get("password").is_none());
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_reports_every_violation() {
    let app = test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({ "name": "", "email": "not-an-email", "password": "123" })),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = response.body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|e| e["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["email", "name", "password"]);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = test_app();
    register_user(&app, "Ann", "a@x.com", "secret1").await;

    let response = send(
        &app,
        Method::POST,
        "/api/users",
        None,
        Some(json!({ "name": "Other Ann", "email": "a@x.com", "password": "secret2" })),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_error_message!(response, "User already exists");
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let app = test_app();

    let response = send(&app, Method::POST, "/api/users", None, Some(json!("just a string"))).await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert!(response.body["errors"].is_array());
}

#[tokio::test]
async fn test_login_returns_working_token() {
    let app = test_app();
    let user = register_user(&app, "Ann", "a@x.com", "secret1").await;

    let response = send(
        &app,
        Method::POST,
        "/api/auth",
        None,
        Some(json!({ "email": "a@x.com", "password": "secret1" })),
    )
    .await;

    assert_status!(response, StatusCode::OK);
    let token = response.body["token"].as_str().expect("token").to_string();

    let me = send(&app, Method::GET, "/api/auth", Some(&token), None).await;
    assert_status!(me, StatusCode::OK);
    assert_eq!(me.body["id"], user.id.to_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = test_app();
    register_user(&app, "Ann", "a@x.com", "secret1").await;

    let wrong_password = send(
        &app,
        Method::POST,
        "/api/auth",
        None,
        Some(json!({ "email": "a@x.com", "password": "wrong-password" })),
    )
    .await;
    let unknown_email = send(
        &app,
        Method::POST,
        "/api/auth",
        None,
        Some(json!({ "email": "nobody@x.com", "password": "secret1" })),
    )
    .await;

    assert_status!(wrong_password, StatusCode::BAD_REQUEST);
    assert_error_message!(wrong_password, "Invalid Credentials");
    assert_eq!(wrong_password.status, unknown_email.status);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_login_requires_password() {
    let app = test_app();

    let response = send(
        &app,
        Method::POST,
        "/api/auth",
        None,
        Some(json!({ "email": "a@x.com" })),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["field"], "password");
    assert_eq!(response.body["errors"][0]["message"], "Password is required");
}

#[tokio::test]
async fn test_who_am_i_without_token() {
    let app = test_app();

    let response = send(&app, Method::GET, "/api/auth", None, None).await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_error_message!(response, "No token, authorization denied");
}

#[tokio::test]
async fn test_who_am_i_with_tampered_token() {
    let app = test_app();
    let user = register_user(&app, "Ann", "a@x.com", "secret1").await;
    let tampered = format!("{}x", user.token);

    let response = send(&app, Method::GET, "/api/auth", Some(&tampered), None).await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_error_message!(response, "Token is not valid");
}

#[tokio::test]
async fn test_who_am_i_with_expired_token() {
    let app = test_app();
    let user = register_user(&app, "Ann", "a@x.com", "secret1").await;

    // Same secret, but a token that expires after one second
    let short_lived = TokenService::new(TEST_SECRET, Duration::from_secs(1));
    let token = short_lived.issue(user.id).unwrap();
    tokio::time::sleep(Duration::from_millis(2100)).await;

    let response = send(&app, Method::GET, "/api/auth", Some(&token), None).await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_error_message!(response, "Token is not valid");
}

#[tokio::test]
async fn test_who_am_i_for_unknown_user() {
    let app = test_app();
    let token = TokenService::new(TEST_SECRET, Duration::from_secs(60))
        .issue(Uuid::new_v4())
        .unwrap();

    let response = send(&app, Method::GET, "/api/auth", Some(&token), None).await;

    assert_status!(response, StatusCode::NOT_FOUND);
    assert_error_message!(response, "User not found");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = test_app();

    let response = send(&app, Method::GET, "/api/nothing-here", None, None).await;

    assert_status!(response, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], 404);
    assert_contains!(response.body["error"].as_str().unwrap_or_default(), "not found");
}
