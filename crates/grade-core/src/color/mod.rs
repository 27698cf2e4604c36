//! Color-space conversion.
//!
//! RGB and HSV both live in the same `(batch, h, w, 3)` buffer layout; the
//! interpretation of the three channels is up to the caller. The adjustment
//! engine converts to HSV for the hue/saturation/value step and again for
//! vibrance, then back.

mod hsv;

pub use hsv::{hsv_to_rgb, pixel_hsv_to_rgb, pixel_rgb_to_hsv, rgb_to_hsv};
