//! Adjustment fields as they appear on the wire.
//!
//! Every field is independently defaulted to its neutral value, so a client
//! may send only the sliders it has touched (or an empty body for the
//! identity render).

use grade_core::AdjustmentParams;
use serde::Deserialize;
use utoipa::ToSchema;

fn neutral_zero() -> f32 {
    0.0
}

fn neutral_one() -> f32 {
    1.0
}

/// The eleven adjustment values of a preview or commit request.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct AdjustmentFields {
    /// Exposure in stops, -4..=4 (default 0)
    #[serde(default = "neutral_zero")]
    pub exposure: f32,
    /// Brightness multiplier, 0..=2 (default 1)
    #[serde(default = "neutral_one")]
    pub brightness: f32,
    /// Contrast, 0..=3 (default 1)
    #[serde(default = "neutral_one")]
    pub contrast: f32,
    /// Gamma, 0..=5 (default 1)
    #[serde(default = "neutral_one")]
    pub gamma: f32,
    /// Shadow lift point, 0..=0.99 (default 0)
    #[serde(default = "neutral_zero")]
    pub shadows: f32,
    /// Midtone gamma, 0.1..=3 (default 1)
    #[serde(default = "neutral_one")]
    pub midtones: f32,
    /// Highlight scale, 0..=2 (default 1)
    #[serde(default = "neutral_one")]
    pub highlights: f32,
    /// Hue rotation in degrees, -180..=180 (default 0)
    #[serde(default = "neutral_zero")]
    pub hue: f32,
    /// Saturation multiplier, 0..=2 (default 1)
    #[serde(default = "neutral_one")]
    pub saturation: f32,
    /// Value multiplier, 0..=2 (default 1)
    #[serde(default = "neutral_one")]
    pub value: f32,
    /// Vibrance, 0..=2 (default 1)
    #[serde(default = "neutral_one")]
    pub vibrance: f32,
}

impl Default for AdjustmentFields {
    fn default() -> Self {
        AdjustmentParams::default().into()
    }
}

impl From<AdjustmentFields> for AdjustmentParams {
    fn from(f: AdjustmentFields) -> Self {
        Self {
            exposure: f.exposure,
            brightness: f.brightness,
            contrast: f.contrast,
            gamma: f.gamma,
            shadows: f.shadows,
            midtones: f.midtones,
            highlights: f.highlights,
            hue: f.hue,
            saturation: f.saturation,
            value: f.value,
            vibrance: f.vibrance,
        }
    }
}

impl From<AdjustmentParams> for AdjustmentFields {
    fn from(p: AdjustmentParams) -> Self {
        Self {
            exposure: p.exposure,
            brightness: p.brightness,
            contrast: p.contrast,
            gamma: p.gamma,
            shadows: p.shadows,
            midtones: p.midtones,
            highlights: p.highlights,
            hue: p.hue,
            saturation: p.saturation,
            value: p.value,
            vibrance: p.vibrance,
        }
    }
}
