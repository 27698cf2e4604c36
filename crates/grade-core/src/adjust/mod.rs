//! The photographic adjustment chain.
//!
//! [`apply`] runs eleven adjustments over an [`crate::ImageBatch`] in a
//! fixed order:
//!
//! 1. Exposure (multiply by 2^stops)
//! 2. Brightness (multiply)
//! 3. Contrast (scale around 0.5, clamp)
//! 4. Shadow remap (lift black point, scale by `highlights`, clamp)
//! 5. Midtones (gamma-like curve)
//! 6. Gamma (clamp)
//! 7. Hue / saturation / value in HSV (clamp)
//! 8. Vibrance (saturation boost weighted toward near-gray pixels)
//! 9. Final clamp
//!
//! The order is a correctness requirement: reordering changes observable
//! output. So is the quirk in step 4 — the shadow remap scales by the
//! `highlights` parameter rather than applying an independent highlight
//! curve, and the two are deliberately coupled.

mod engine;
mod params;

pub use engine::apply;
pub use params::AdjustmentParams;
