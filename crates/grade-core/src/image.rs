//! Batched RGB image buffer.
//!
//! [`ImageBatch`] is the unit of exchange for the whole pipeline: a dense
//! `(batch, height, width, 3)` array of f32 samples, nominally in 0.0..=1.0.
//! The channel dimension is always exactly 3; this is enforced by
//! construction rather than carried as a field.

use std::fmt;

/// Error raised when constructing an image from mismatched dimensions.
#[derive(Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Buffer length does not equal `batch * height * width * 3`.
    InvalidShape {
        batch: usize,
        height: usize,
        width: usize,
        len: usize,
    },
    /// One of the dimensions is zero.
    EmptyImage,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::InvalidShape {
                batch,
                height,
                width,
                len,
            } => write!(
                f,
                "buffer of {len} samples does not match shape {batch}x{height}x{width}x3"
            ),
            ImageError::EmptyImage => write!(f, "image dimensions must be non-zero"),
        }
    }
}

impl std::error::Error for ImageError {}

/// A batch of RGB images: `(batch, height, width, 3)` f32 samples.
///
/// Samples are nominally in 0.0..=1.0; pipeline stages clamp at defined
/// checkpoints rather than on every write. Row-major layout, channel
/// innermost.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBatch {
    batch: usize,
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl ImageBatch {
    /// Number of channels per pixel. Fixed; the pipeline only handles RGB.
    pub const CHANNELS: usize = 3;

    /// Create an image batch from a sample buffer.
    ///
    /// Fails with [`ImageError::InvalidShape`] if the buffer length does not
    /// match `batch * height * width * 3`, and [`ImageError::EmptyImage`] if
    /// any dimension is zero.
    pub fn new(
        batch: usize,
        height: usize,
        width: usize,
        data: Vec<f32>,
    ) -> Result<Self, ImageError> {
        if batch == 0 || height == 0 || width == 0 {
            return Err(ImageError::EmptyImage);
        }
        if data.len() != batch * height * width * Self::CHANNELS {
            return Err(ImageError::InvalidShape {
                batch,
                height,
                width,
                len: data.len(),
            });
        }
        Ok(Self {
            batch,
            height,
            width,
            data,
        })
    }

    /// Create a single-frame batch filled with one value.
    pub fn filled(height: usize, width: usize, fill: f32) -> Result<Self, ImageError> {
        Self::new(1, height, width, vec![fill; height * width * Self::CHANNELS])
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Flat sample buffer, row-major, channel innermost.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Iterate over pixels as `&[f32; 3]`-shaped slices.
    pub fn pixels(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(Self::CHANNELS)
    }

    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.data.chunks_exact_mut(Self::CHANNELS)
    }

    /// Sample at (frame, y, x, channel). Debug-asserted bounds.
    pub fn get(&self, frame: usize, y: usize, x: usize, c: usize) -> f32 {
        debug_assert!(frame < self.batch && y < self.height && x < self.width && c < 3);
        self.data[((frame * self.height + y) * self.width + x) * Self::CHANNELS + c]
    }

    /// Apply a function to every sample in place.
    pub fn map_in_place(&mut self, f: impl Fn(f32) -> f32) {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    /// Clamp every sample to 0.0..=1.0.
    pub fn clamp_unit(&mut self) {
        self.map_in_place(|v| v.clamp(0.0, 1.0));
    }

    /// Map each pixel through a `[f32; 3] -> [f32; 3]` function, producing a
    /// new batch of the same shape.
    pub fn map_pixels(&self, f: impl Fn([f32; 3]) -> [f32; 3]) -> Self {
        let mut out = self.clone();
        for px in out.pixels_mut() {
            let [a, b, c] = f([px[0], px[1], px[2]]);
            px[0] = a;
            px[1] = b;
            px[2] = c;
        }
        out
    }
}
