//! Tests for the API client functionality
//!
//! Validates URL construction for every backend operation and the error
//! classification applied to failed responses.

use crate::api::SnaplineClient;
use shared::models::ApiError;

/// Tests API client creation
#[test]
fn test_api_client_creation() {
    let _client = SnaplineClient::new("http://localhost:8000");
    // Client should be created successfully
}

/// Tests trailing slashes are trimmed from the base URL
#[test]
fn test_base_url_trimming() {
    let client = SnaplineClient::new("http://localhost:8000/");
    assert_eq!(
        client.api_url("post/recent"),
        "http://localhost:8000/post/recent"
    );
}

/// Tests leading slashes on paths are collapsed
#[test]
fn test_api_url_join() {
    let client = SnaplineClient::new("/api");
    assert_eq!(client.api_url("/user/login/"), "/api/user/login/");
    assert_eq!(client.api_url("user/login/"), "/api/user/login/");
}

/// Tests user endpoint paths
#[test]
fn test_user_endpoints() {
    let client = SnaplineClient::new("/api");

    assert_eq!(client.api_url("user"), "/api/user");
    assert_eq!(client.api_url("user/search"), "/api/user/search");

    let id = "17";
    assert_eq!(client.api_url(&format!("user/{id}/")), "/api/user/17/");
    assert_eq!(
        client.api_url(&format!("user/follow/{id}/")),
        "/api/user/follow/17/"
    );
    assert_eq!(client.api_url("user/logout/"), "/api/user/logout/");
}

/// Tests post endpoint paths
#[test]
fn test_post_endpoints() {
    let client = SnaplineClient::new("/api");

    let post_id = 23;
    assert_eq!(
        client.api_url(&format!("post/{post_id}/like/")),
        "/api/post/23/like/"
    );
    assert_eq!(
        client.api_url(&format!("post/{post_id}/unlike/")),
        "/api/post/23/unlike/"
    );
    assert_eq!(
        client.api_url(&format!("post/{post_id}/save/")),
        "/api/post/23/save/"
    );
    assert_eq!(
        client.api_url(&format!("post/{post_id}/unsave/")),
        "/api/post/23/unsave/"
    );

    let comment_id = 5;
    assert_eq!(
        client.api_url(&format!("post/comments/{comment_id}/like/")),
        "/api/post/comments/5/like/"
    );

    assert_eq!(client.api_url("post/recent"), "/api/post/recent");
    assert_eq!(client.api_url("post/saved"), "/api/post/saved");
    assert_eq!(client.api_url("post/liked"), "/api/post/liked");
    assert_eq!(
        client.api_url("post/user/9/"),
        "/api/post/user/9/"
    );
}

/// Tests chat endpoint path
#[test]
fn test_chat_endpoint() {
    let client = SnaplineClient::new("/api");
    let room = "general";
    assert_eq!(
        client.api_url(&format!("chat/{room}/messages")),
        "/api/chat/general/messages"
    );
}

/// Tests error classification for failed auth responses
#[test]
fn test_error_classification() {
    let unauthorized = ApiError::from_response(401, r#"{"detail": "No active account"}"#);
    assert_eq!(unauthorized.to_string(), "No active account");

    let rejected = ApiError::from_response(
        400,
        r#"{"username": ["This field must be unique."], "email": "Enter a valid email address."}"#,
    );
    assert_eq!(
        rejected.to_string(),
        "Enter a valid email address.\nThis field must be unique."
    );

    let opaque = ApiError::from_response(502, "Bad Gateway");
    assert_eq!(opaque.to_string(), "Request failed with status 502");
}
