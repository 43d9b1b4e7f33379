//! Bearer-token authorization tests.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

const MESSAGE: &str = r#"{"type":"MESSAGE","user":{"displayName":"Alice"},"message":{"text":"hi"}}"#;

async fn post(server: &common::TestServer, body: &str, authorization: Option<&str>) -> (StatusCode, Value) {
    let mut request = common::client().post(server.url()).body(body.to_string());
    if let Some(value) = authorization {
        request = request.header("authorization", value);
    }
    let response = request.send().await.expect("server unreachable");
    let status = response.status();
    (status, response.json().await.unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_missing_header_is_rejected_before_classification() {
    let server = common::start_server("part-xyz").await;

    let (status, body) = post(&server, MESSAGE, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Unauthorized" }));
    assert_eq!(server.replies(), 0);
}

#[tokio::test]
async fn test_wrong_scheme_and_wrong_token_are_rejected() {
    let server = common::start_server("part-xyz").await;

    for header in ["Basic part-xyz", "part-xyz", "Bearer part-abc", "Bearer "] {
        let (status, body) = post(&server, MESSAGE, Some(header)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "header {header:?}");
        assert_eq!(body, json!({ "error": "Unauthorized" }));
    }
    assert_eq!(server.replies(), 0);
}

#[tokio::test]
async fn test_token_containing_secret_is_accepted() {
    let server = common::start_server("part-xyz").await;

    let (status, body) = post(&server, MESSAGE, Some("Bearer eyJhbGc.part-xyz.sig")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "text": "Alice said: hi" }));
    assert_eq!(server.replies(), 1);
}

#[tokio::test]
async fn test_unauthorized_invalid_body_reports_401() {
    let server = common::start_server("part-xyz").await;

    let (status, _) = post(&server, "not json", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_authorized_invalid_body_reports_400() {
    let server = common::start_server("part-xyz").await;

    let (status, body) = post(&server, "not json", Some("Bearer part-xyz")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid request body, expected JSON" }));
}

#[tokio::test]
async fn test_no_secret_means_no_header_needed() {
    let server = common::start_server("").await;

    let (status, _) = post(&server, MESSAGE, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post(&server, MESSAGE, Some("Bearer anything")).await;
    assert_eq!(status, StatusCode::OK);
}
