use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing cache key")]
    MissingKey,

    #[error("No cached image for key '{0}'. Run the node first.")]
    CacheMiss(String),

    #[error("Invalid image payload: {0}")]
    InvalidImage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crate::services::codec::CodecError> for ApiError {
    fn from(e: crate::services::codec::CodecError) -> Self {
        use crate::services::codec::CodecError;
        match e {
            CodecError::Base64(_) | CodecError::PngDecode(_) | CodecError::Unsupported(_) => {
                ApiError::InvalidImage(e.to_string())
            }
            CodecError::PngEncode(_) | CodecError::Shape(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Preview callers poll interactively, so client mistakes (missing or
        // stale keys, undecodable payloads) are 400s they can act on.
        let status = match &self {
            ApiError::MissingKey => StatusCode::BAD_REQUEST,
            ApiError::CacheMiss(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": "error",
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
