//! Tests for the /api/imageadjust/update preview endpoint.

mod common;

use common::{fixtures, TestApp};

#[tokio::test]
async fn test_preview_missing_key_is_client_error() {
    let app = TestApp::new();

    let response = app.post_json("/api/imageadjust/update", "{}").await;

    common::assert_client_error(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["message"].as_str(), Some("Missing cache key"));
}

#[tokio::test]
async fn test_preview_unknown_key_is_client_error() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/imageadjust/update?key=imageadjust_wf1_404", "{}")
        .await;

    common::assert_client_error(&response);
}

#[tokio::test]
async fn test_preview_renders_committed_image() {
    let app = TestApp::new();
    let key = app
        .commit_image("wf1", "5", &fixtures::gradient_png_uri(64, 32))
        .await;

    let response = app
        .post_json(&format!("/api/imageadjust/update?key={key}"), "{}")
        .await;

    let uri = common::assert_preview_success(&response);
    let preview = fixtures::decode_uri(&uri);

    // The preview always renders at the 512 box, aspect preserved
    assert_eq!(preview.width(), 512);
    assert_eq!(preview.height(), 256);
}

#[tokio::test]
async fn test_preview_empty_body_defaults_to_identity() {
    let app = TestApp::new();
    let key = app
        .commit_image("wf1", "5", &fixtures::solid_png_uri(16, 16, [0.5, 0.25, 0.75]))
        .await;

    let response = app
        .post_json(&format!("/api/imageadjust/update?key={key}"), "{}")
        .await;

    let preview = fixtures::decode_uri(&common::assert_preview_success(&response));
    // Identity parameters on a solid image reproduce the color (within 8-bit
    // quantization)
    let px = preview.data();
    assert!((px[0] - 0.5).abs() < 0.01, "r = {}", px[0]);
    assert!((px[1] - 0.25).abs() < 0.01, "g = {}", px[1]);
    assert!((px[2] - 0.75).abs() < 0.01, "b = {}", px[2]);
}

#[tokio::test]
async fn test_preview_saturation_zero_is_grayscale() {
    let app = TestApp::new();
    let key = app
        .commit_image("wf1", "5", &fixtures::gradient_png_uri(32, 16))
        .await;

    let response = app
        .post_json(
            &format!("/api/imageadjust/update?key={key}"),
            r#"{"saturation": 0.0}"#,
        )
        .await;

    let preview = fixtures::decode_uri(&common::assert_preview_success(&response));
    for px in preview.pixels() {
        assert!(
            (px[0] - px[1]).abs() < 0.01 && (px[1] - px[2]).abs() < 0.01,
            "expected grayscale pixel, got {px:?}"
        );
    }
}

#[tokio::test]
async fn test_preview_does_not_mutate_cache() {
    let app = TestApp::new();
    let key = app
        .commit_image("wf1", "5", &fixtures::solid_png_uri(8, 8, [0.8, 0.1, 0.1]))
        .await;

    let before = app.cache.lookup(&key).unwrap();
    let response = app
        .post_json(
            &format!("/api/imageadjust/update?key={key}"),
            r#"{"exposure": -4.0, "saturation": 0.0}"#,
        )
        .await;
    common::assert_preview_success(&response);

    assert_eq!(app.cache.lookup(&key).unwrap(), before);
    assert_eq!(app.cache.len(), 1);
}

#[tokio::test]
async fn test_preview_ignores_unknown_body_fields() {
    let app = TestApp::new();
    let key = app
        .commit_image("wf1", "5", &fixtures::solid_png_uri(8, 8, [0.5, 0.5, 0.5]))
        .await;

    let response = app
        .post_json(
            &format!("/api/imageadjust/update?key={key}"),
            r#"{"contrast": 1.2, "version": "init"}"#,
        )
        .await;

    common::assert_preview_success(&response);
}
