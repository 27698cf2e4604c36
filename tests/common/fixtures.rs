//! Image fixtures for integration tests.

use grade_core::ImageBatch;
use gradecast::services::codec;

/// A solid-color image as a PNG data URI
pub fn solid_png_uri(width: usize, height: usize, rgb: [f32; 3]) -> String {
    let mut data = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height {
        data.extend_from_slice(&rgb);
    }
    let image = ImageBatch::new(1, height, width, data).unwrap();
    codec::encode_data_uri(&image).unwrap()
}

/// A horizontal red-to-blue gradient as a PNG data URI
pub fn gradient_png_uri(width: usize, height: usize) -> String {
    let mut data = Vec::with_capacity(width * height * 3);
    for _ in 0..height {
        for x in 0..width {
            let t = x as f32 / (width - 1).max(1) as f32;
            data.extend_from_slice(&[1.0 - t, 0.2, t]);
        }
    }
    let image = ImageBatch::new(1, height, width, data).unwrap();
    codec::encode_data_uri(&image).unwrap()
}

/// Decode a PNG data URI returned by the API
pub fn decode_uri(uri: &str) -> ImageBatch {
    codec::decode_base64_png(uri).expect("response image should decode")
}
