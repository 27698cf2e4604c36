//! The adjustment engine: a pure, fixed-order chain over an image batch.

use crate::color::{hsv_to_rgb, rgb_to_hsv};
use crate::image::ImageBatch;
use crate::EPS;

use super::AdjustmentParams;

/// Apply the full adjustment chain to an image batch.
///
/// Pure: operates on a private copy and returns a batch of the same shape.
/// With [`AdjustmentParams::default`] the output equals the input within
/// 1e-4 per channel.
pub fn apply(image: &ImageBatch, params: AdjustmentParams) -> ImageBatch {
    let mut img = image.clone();

    // 1. Exposure in stops, 2. brightness. No clamp yet: contrast sees the
    // raw scaled values.
    let exposure_gain = 2.0_f32.powf(params.exposure);
    img.map_in_place(|v| v * exposure_gain * params.brightness);

    // 3. Contrast around mid-gray.
    img.map_in_place(|v| ((v - 0.5) * params.contrast + 0.5).clamp(0.0, 1.0));

    // 4. Shadow remap. The scale by `highlights` here is intentional
    // coupling, not an independent highlight curve.
    let shadow_div = 1.0 - params.shadows + EPS;
    img.map_in_place(|v| {
        ((v - params.shadows) / shadow_div * params.highlights).clamp(0.0, 1.0)
    });

    // 5. Midtones, 6. gamma. Both reciprocal exponents carry the epsilon so
    // a zero base with a fractional exponent stays defined.
    let midtone_exp = 1.0 / params.midtones + EPS;
    img.map_in_place(|v| v.powf(midtone_exp));

    let gamma_exp = 1.0 / params.gamma + EPS;
    img.map_in_place(|v| v.powf(gamma_exp).clamp(0.0, 1.0));

    // 7. Hue / saturation / value.
    let hue_shift = params.hue / 360.0;
    let mut hsv = rgb_to_hsv(&img);
    for px in hsv.pixels_mut() {
        px[0] = (px[0] + hue_shift).rem_euclid(1.0);
        px[1] *= params.saturation;
        px[2] *= params.value;
    }
    hsv.clamp_unit();

    // 8. Back to RGB, then vibrance on the result.
    let img = adjust_vibrance(&hsv_to_rgb(&hsv), params.vibrance);

    // 9. Final clamp.
    let mut img = img;
    img.clamp_unit();
    img
}

/// Saturation boost weighted inversely by existing saturation: near-gray
/// pixels move the most, already-saturated pixels barely change.
fn adjust_vibrance(image: &ImageBatch, vibrance: f32) -> ImageBatch {
    let mut hsv = rgb_to_hsv(image);
    for px in hsv.pixels_mut() {
        let boost = (1.0 - px[1]) * (vibrance - 1.0);
        px[1] = (px[1] + boost).clamp(0.0, 1.0);
    }
    hsv_to_rgb(&hsv)
}
