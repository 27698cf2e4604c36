//! Adjustment parameters.

/// The eleven adjustment parameters, one record per render.
///
/// `Default` is the identity: applying the default parameters returns the
/// input unchanged (within floating-point tolerance). Documented ranges are
/// what interactive callers should offer; values outside them are accepted
/// and simply produce extreme output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentParams {
    /// Exposure in stops, -4.0..=4.0. 0.0 is neutral.
    pub exposure: f32,
    /// Brightness multiplier, 0.0..=2.0. 1.0 is neutral.
    pub brightness: f32,
    /// Contrast around mid-gray, 0.0..=3.0. 1.0 is neutral; 0.0 collapses
    /// every pixel to 0.5.
    pub contrast: f32,
    /// Gamma, 0.0..=5.0. 1.0 is neutral.
    pub gamma: f32,
    /// Shadow lift point, 0.0..=0.99. 0.0 is neutral.
    pub shadows: f32,
    /// Midtone gamma, 0.1..=3.0. 1.0 is neutral.
    pub midtones: f32,
    /// Highlight scale applied inside the shadow remap, 0.0..=2.0.
    /// 1.0 is neutral.
    pub highlights: f32,
    /// Hue rotation in degrees, -180.0..=180.0. 0.0 is neutral.
    pub hue: f32,
    /// Saturation multiplier, 0.0..=2.0. 1.0 is neutral.
    pub saturation: f32,
    /// Value (HSV brightness) multiplier, 0.0..=2.0. 1.0 is neutral.
    pub value: f32,
    /// Vibrance, 0.0..=2.0. 1.0 is neutral; above 1.0 boosts saturation
    /// most where there is least of it.
    pub vibrance: f32,
}

impl Default for AdjustmentParams {
    fn default() -> Self {
        Self {
            exposure: 0.0,
            brightness: 1.0,
            contrast: 1.0,
            gamma: 1.0,
            shadows: 0.0,
            midtones: 1.0,
            highlights: 1.0,
            hue: 0.0,
            saturation: 1.0,
            value: 1.0,
            vibrance: 1.0,
        }
    }
}
