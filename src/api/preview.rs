use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::{codec, PreviewService};

use super::AdjustmentFields;

/// Query parameters for the preview endpoint
#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Cache key returned by a commit
    #[serde(default)]
    pub key: Option<String>,
}

/// Successful preview response
#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewResponse {
    /// Always "success"
    pub status: String,
    /// Re-rendered preview as a PNG data URI
    pub updatedimage: String,
}

/// Re-render a cached image with new adjustment parameters
///
/// Looks up the full-resolution image committed under `key`, downscales it
/// to the preview box, applies the adjustment chain, and returns the result
/// as a PNG data URI. Does not modify the cache.
#[utoipa::path(
    post,
    path = "/api/imageadjust/update",
    request_body = AdjustmentFields,
    responses(
        (status = 200, description = "Preview rendered", body = PreviewResponse),
        (status = 400, description = "Missing or unknown cache key"),
    ),
    params(
        ("key" = Option<String>, Query, description = "Cache key returned by a commit"),
    ),
    tag = "Preview"
)]
pub async fn handle_preview(
    State(preview): State<Arc<PreviewService>>,
    Query(query): Query<PreviewQuery>,
    Json(fields): Json<AdjustmentFields>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let key = query.key.filter(|k| !k.is_empty()).ok_or(ApiError::MissingKey)?;

    tracing::debug!(key = %key, "Preview request received");

    // The adjustment math is CPU-bound; keep it off the async workers.
    let response = tokio::task::spawn_blocking(move || -> Result<PreviewResponse, ApiError> {
        let adjusted = preview.render_preview(&key, fields.into())?;
        let updatedimage = codec::encode_data_uri(&adjusted)?;
        Ok(PreviewResponse {
            status: "success".to_string(),
            updatedimage,
        })
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Task error: {e}")))??;

    Ok(Json(response))
}
