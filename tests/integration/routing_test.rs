//! Routing, health, and authentication-rejection behavior.

use axum::http::StatusCode;

use crate::helpers::test_app;

#[tokio::test]
async fn test_health_returns_ok_without_auth() {
    let app = test_app();

    let res = app.request("GET", "/health", None, None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert!(res.body["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = test_app();

    let res = app.request("GET", "/api/does-not-exist", None, None).await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_authorization_header_rejected() {
    let app = test_app();

    for path in ["/api/auth/me", "/api/deepwork", "/api/schedules", "/api/notifications"] {
        let res = app.request("GET", path, None, None).await;

        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "path: {path}");
        assert_eq!(res.error_code(), "A003", "path: {path}");
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let app = test_app();

    let res = app
        .request_with_auth_header("GET", "/api/auth/me", "Basic dXNlcjpwYXNz")
        .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.error_code(), "A003");
}

#[tokio::test]
async fn test_garbled_token_rejected() {
    let app = test_app();

    let res = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.error_code(), "A001");
}

#[tokio::test]
async fn test_expired_token_gets_dedicated_code() {
    let app = test_app();
    let token = app.expired_token("alice@example.com");

    let res = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.error_code(), "A002");
}

#[tokio::test]
async fn test_valid_token_passes_auth_and_reaches_database() {
    let app = test_app();
    let token = app.issue_token("alice@example.com");

    // The token is accepted; the request then fails at the (unreachable)
    // database with the database-error envelope rather than a 401.
    let res = app
        .request("GET", "/api/auth/me", None, Some(&token))
        .await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.error_code(), "E998");
}

#[tokio::test]
async fn test_error_envelope_shape() {
    let app = test_app();

    let res = app.request("GET", "/api/deepwork", None, None).await;

    assert_eq!(res.body.as_object().map(|o| o.len()), Some(2));
    assert!(res.body["code"].is_string());
    assert!(res.body["message"].is_string());
}
