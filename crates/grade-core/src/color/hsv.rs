//! RGB ⇄ HSV conversion.
//!
//! Standard max/min/delta sector formulas with all channels in 0.0..=1.0 and
//! hue normalized to 0.0..1.0 (a full turn, not degrees). Divisions are
//! guarded by [`EPS`] so that gray pixels (delta = 0) produce hue 0 without
//! a special case.

use crate::image::ImageBatch;
use crate::EPS;

/// Convert a single RGB pixel to HSV.
///
/// The hue sector is selected by which channel equals the per-pixel max; at
/// sector boundaries (two channels tied for max) the candidate formulas
/// agree, so selection order is not observable.
pub fn pixel_rgb_to_hsv([r, g, b]: [f32; 3]) -> [f32; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut h = 0.0;
    if delta != 0.0 {
        if max == r {
            h = ((g - b) / (delta + EPS)) / 6.0;
        } else if max == g {
            h = (2.0 + (b - r) / (delta + EPS)) / 6.0;
        } else {
            h = (4.0 + (r - g) / (delta + EPS)) / 6.0;
        }
    }
    // h is at least -1/6 here, so a single +1 wraps it into 0..1
    let h = (h + 1.0) % 1.0;

    let s = if max != 0.0 { delta / (max + EPS) } else { 0.0 };

    [h, s, max]
}

/// Convert a single HSV pixel back to RGB via the 6-sector reconstruction.
pub fn pixel_hsv_to_rgb([h, s, v]: [f32; 3]) -> [f32; 3] {
    let h6 = h * 6.0;
    let sector = (h6.floor() as i32).rem_euclid(6);
    let f = h6 - h6.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Convert a whole batch from RGB to HSV.
pub fn rgb_to_hsv(image: &ImageBatch) -> ImageBatch {
    image.map_pixels(pixel_rgb_to_hsv)
}

/// Convert a whole batch from HSV to RGB.
pub fn hsv_to_rgb(image: &ImageBatch) -> ImageBatch {
    image.map_pixels(pixel_hsv_to_rgb)
}
