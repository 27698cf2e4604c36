//! grade-core: photographic color-adjustment chain for batched RGB images
//!
//! This library implements the math behind gradecast: an in-memory image
//! buffer type, RGB/HSV color-space conversion, a fixed-order chain of
//! eleven photographic adjustments, and an aspect-preserving bilinear
//! downscale for preview rendering.
//!
//! # Quick Start
//!
//! ```
//! use grade_core::{AdjustmentParams, ImageBatch};
//!
//! // A 1x2x2 mid-gray image
//! let image = ImageBatch::new(1, 2, 2, vec![0.5; 12]).unwrap();
//!
//! // Push exposure up one stop
//! let params = AdjustmentParams {
//!     exposure: 1.0,
//!     ..AdjustmentParams::default()
//! };
//! let adjusted = grade_core::adjust::apply(&image, params);
//! assert!(adjusted.data()[0] > 0.9);
//! ```
//!
//! # Pipeline Order
//!
//! [`adjust::apply`] runs the adjustments in a fixed order; the order is a
//! correctness requirement, not a convenience. See the module docs of
//! [`adjust`] for the full list.
//!
//! # Numerical Safety
//!
//! Every divisor and reciprocal exponent in the pipeline carries a fixed
//! epsilon (1e-10) so that zero deltas, zero denominators, and zero bases
//! with fractional exponents are well defined without branching. The
//! epsilon is a guard, not a user-visible parameter.

pub mod adjust;
pub mod color;
pub mod image;
pub mod resize;

pub use adjust::AdjustmentParams;
pub use image::{ImageBatch, ImageError};

/// Epsilon added to divisors and reciprocal exponents throughout the
/// pipeline to keep them total over [0,1] inputs.
pub const EPS: f32 = 1e-10;
