//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use gradecast::server::{build_router, create_app_state};
use gradecast::services::PreviewCache;

/// Test application with router and direct access to the cache
pub struct TestApp {
    router: axum::Router,
    pub cache: Arc<PreviewCache>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let state = create_app_state();

        // Keep a cache handle for test assertions
        let cache = state.cache.clone();

        // Build router using the shared server module (same as production)
        let router = build_router(state);

        Self { router, cache }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        self.request(
            Request::post(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Commit an image and return the cache key from the response
    pub async fn commit_image(&self, workflow_id: &str, node_id: &str, image_uri: &str) -> String {
        let body = serde_json::json!({
            "workflow_id": workflow_id,
            "node_id": node_id,
            "image": image_uri,
        });
        let response = self
            .post_json("/api/imageadjust/commit", &body.to_string())
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());

        let json: serde_json::Value = response.json();
        json["cache_key"].as_str().unwrap().to_string()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
