//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::services::{PreviewCache, PreviewService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<PreviewCache>,
    pub preview: Arc<PreviewService>,
}

/// Create application state with the default cache capacity.
pub fn create_app_state() -> AppState {
    let cache = Arc::new(PreviewCache::default());
    let preview = Arc::new(PreviewService::new(cache.clone()));
    AppState { cache, preview }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/imageadjust/update", post(handle_preview))
        .route("/api/imageadjust/commit", post(handle_commit))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_preview(
    axum::extract::State(state): axum::extract::State<AppState>,
    query: axum::extract::Query<api::PreviewQuery>,
    body: axum::Json<api::AdjustmentFields>,
) -> Result<axum::Json<api::PreviewResponse>, ApiError> {
    api::handle_preview(axum::extract::State(state.preview), query, body).await
}

async fn handle_commit(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: axum::Json<api::CommitRequest>,
) -> Result<axum::Json<api::CommitResponse>, ApiError> {
    api::handle_commit(axum::extract::State(state.preview), body).await
}
