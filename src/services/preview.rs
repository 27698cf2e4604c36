//! Preview orchestration.
//!
//! [`PreviewService`] ties the cache and the adjustment engine together:
//! commits register a full-resolution image and return the adjusted result,
//! previews re-render a downscaled copy of the cached image with new
//! parameters without touching the cache.

use std::sync::Arc;

use grade_core::adjust;
use grade_core::resize::downscale_to_fit;
use grade_core::{AdjustmentParams, ImageBatch};

use crate::error::ApiError;
use crate::services::PreviewCache;

/// Bounding box edge for preview rendering, in pixels.
pub const PREVIEW_RESOLUTION: usize = 512;

pub struct PreviewService {
    cache: Arc<PreviewCache>,
    preview_resolution: usize,
}

impl PreviewService {
    pub fn new(cache: Arc<PreviewCache>) -> Self {
        Self {
            cache,
            preview_resolution: PREVIEW_RESOLUTION,
        }
    }

    #[cfg(test)]
    pub fn with_preview_resolution(cache: Arc<PreviewCache>, resolution: usize) -> Self {
        Self {
            cache,
            preview_resolution: resolution,
        }
    }

    /// Register a full-resolution image for a slot and adjust it.
    ///
    /// The cache sees the unadjusted original, so later previews start from
    /// the same data the engine saw here. Adjustment runs at full
    /// resolution.
    pub fn commit_and_adjust(
        &self,
        slot_key: &str,
        image: ImageBatch,
        params: AdjustmentParams,
    ) -> ImageBatch {
        self.cache.commit(slot_key, image.clone());
        adjust::apply(&image, params)
    }

    /// Re-render the cached image for `key` with new parameters.
    ///
    /// Read-only with respect to the cache. Fails with
    /// [`ApiError::CacheMiss`] when the key was never committed or has been
    /// evicted.
    pub fn render_preview(
        &self,
        key: &str,
        params: AdjustmentParams,
    ) -> Result<ImageBatch, ApiError> {
        let image = self
            .cache
            .lookup(key)
            .ok_or_else(|| ApiError::CacheMiss(key.to_string()))?;

        let preview = downscale_to_fit(&image, self.preview_resolution, self.preview_resolution);
        Ok(adjust::apply(&preview, params))
    }

    pub fn cache(&self) -> &Arc<PreviewCache> {
        &self.cache
    }
}
