//! Customer API Tests
//!
//! Request validation on the customer record endpoints.

use axum::http::StatusCode;

use crate::common::{client_token, TestApp};

#[tokio::test]
async fn test_edit_customer_rejects_invalid_email() {
    let app = TestApp::new();

    let body = r#"{"email": "not-an-email"}"#;
    let response = app
        .put_json_auth("/api/User/EditUser/c-1", body, &client_token())
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_customer_rejects_out_of_range_age() {
    let app = TestApp::new();

    let body = r#"{"age": 200}"#;
    let response = app
        .put_json_auth("/api/User/EditUser/c-1", body, &client_token())
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_customer_requires_token() {
    let app = TestApp::new();

    let response = app
        .put_json_auth("/api/User/EditUser/c-1", r#"{}"#, "not.a.jwt")
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_distance_rejects_out_of_range_latitude() {
    let app = TestApp::new();

    let response = app
        .get_auth(
            "/api/User/GetDistance/c-1?latitude=120.0&longitude=10.0",
            &client_token(),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_distance_rejects_missing_query_params() {
    let app = TestApp::new();

    let response = app
        .get_auth("/api/User/GetDistance/c-1?latitude=10.0", &client_token())
        .await;

    // Query string does not deserialize
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_rejects_blank_text() {
    let app = TestApp::new();

    let response = app
        .get_auth("/api/User/SearchUser?searchText=", &client_token())
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_rejects_missing_text_parameter() {
    let app = TestApp::new();

    let response = app.get_auth("/api/User/SearchUser", &client_token()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_versioned_routes_share_semantics() {
    let app = TestApp::new();

    let unversioned = app
        .get_auth("/api/User/SearchUser?searchText=", &client_token())
        .await;
    let versioned = app
        .get_auth("/api/User/v1/SearchUser?searchText=", &client_token())
        .await;

    assert_eq!(unversioned.status(), versioned.status());
}
