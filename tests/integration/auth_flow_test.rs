//! Signup and login request validation at the HTTP boundary.
//!
//! These requests are rejected by the validation layer before any query
//! runs, so they exercise the real handlers end to end.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::test_app;

#[tokio::test]
async fn test_signup_rejects_invalid_email() {
    let app = test_app();

    let res = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({
                "email": "not-an-email",
                "password": "password1",
                "name": "Alice"
            })),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.error_code(), "V001");
}

#[tokio::test]
async fn test_signup_rejects_blank_name() {
    let app = test_app();

    let res = app
        .request(
            "POST",
            "/api/auth/signup",
            Some(json!({
                "email": "alice@example.com",
                "password": "password1",
                "name": ""
            })),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.error_code(), "V001");
}

#[tokio::test]
async fn test_login_rejects_invalid_email() {
    let app = test_app();

    let res = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "email": "nobody",
                "password": "password1"
            })),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.error_code(), "V001");
}

#[tokio::test]
async fn test_login_rejects_empty_password() {
    let app = test_app();

    let res = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "email": "alice@example.com",
                "password": ""
            })),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.error_code(), "V001");
}
