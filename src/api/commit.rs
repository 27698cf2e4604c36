use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::{codec, slot_key, PreviewService};

use super::AdjustmentFields;

/// Request body for a commit
#[derive(Debug, Deserialize, ToSchema)]
pub struct CommitRequest {
    /// Workflow identifier (defaults to "unknown")
    #[serde(default)]
    pub workflow_id: Option<String>,
    /// Node identifier within the workflow (defaults to "x")
    #[serde(default)]
    pub node_id: Option<String>,
    /// Full-resolution image as base64 PNG, raw or data URI
    pub image: String,
    #[serde(flatten)]
    pub adjustments: AdjustmentFields,
}

/// Response from a commit
#[derive(Debug, Serialize, ToSchema)]
pub struct CommitResponse {
    /// "success", or "error" when the pass-through fallback was taken
    pub status: String,
    /// Cache key under which the full-resolution image is stored
    pub cache_key: String,
    /// Human-readable status message
    pub message: String,
    /// Adjusted image (or the unadjusted original on fallback) as a PNG
    /// data URI
    pub image: String,
}

/// Commit a full-resolution image and apply the adjustment chain
///
/// Stores the unadjusted image in the preview cache under the slot derived
/// from (workflow_id, node_id), superseding any prior image for that slot,
/// then applies the adjustments at full resolution. An internal failure
/// after the image has been decoded degrades to returning the original
/// image with an error message rather than failing the caller's workflow.
#[utoipa::path(
    post,
    path = "/api/imageadjust/commit",
    request_body = CommitRequest,
    responses(
        (status = 200, description = "Image committed and adjusted", body = CommitResponse),
        (status = 400, description = "Image payload could not be decoded"),
    ),
    tag = "Commit"
)]
pub async fn handle_commit(
    State(preview): State<Arc<PreviewService>>,
    Json(request): Json<CommitRequest>,
) -> Result<Json<CommitResponse>, ApiError> {
    // No image, nothing to pass through: an undecodable payload is the
    // caller's error.
    let image = codec::decode_base64_png(&request.image)?;

    let key = slot_key(request.workflow_id.as_deref(), request.node_id.as_deref());
    let params = request.adjustments.into();

    tracing::info!(
        key = %key,
        width = image.width(),
        height = image.height(),
        "Commit request received"
    );

    let response = tokio::task::spawn_blocking(move || -> Result<CommitResponse, ApiError> {
        let adjusted = preview.commit_and_adjust(&key, image.clone(), params);

        match codec::encode_data_uri(&adjusted) {
            Ok(uri) => Ok(CommitResponse {
                status: "success".to_string(),
                cache_key: key,
                message: "Image adjustments applied".to_string(),
                image: uri,
            }),
            Err(e) => {
                // Pass-through fallback: the workflow keeps its image even
                // when the adjusted result cannot be delivered.
                tracing::error!(error = %e, key = %key, "Failed to encode adjusted image");
                let original = codec::encode_data_uri(&image)
                    .map_err(|e2| ApiError::Internal(e2.to_string()))?;
                Ok(CommitResponse {
                    status: "error".to_string(),
                    cache_key: key,
                    message: format!("Failed to apply adjustments: {e}"),
                    image: original,
                })
            }
        }
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Task error: {e}")))??;

    Ok(Json(response))
}
