//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a JSON error payload: 400, status "error", non-empty message
pub fn assert_client_error(response: &TestResponse) {
    assert_status(response, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_str(), Some("error"));
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "Expected an error message, got {json}"
    );
}

/// Assert a successful preview payload and return the data URI
pub fn assert_preview_success(response: &TestResponse) -> String {
    assert_ok(response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_str(), Some("success"));

    let uri = json["updatedimage"].as_str().expect("updatedimage missing");
    assert!(
        uri.starts_with("data:image/png;base64,"),
        "Expected a PNG data URI, got {uri:.40}..."
    );
    uri.to_string()
}
