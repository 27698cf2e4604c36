//! PNG / base64 transport codec.
//!
//! The preview protocol moves images as `data:image/png;base64,<...>` URIs.
//! This module converts between those payloads and [`ImageBatch`] buffers:
//! 8-bit PNG in, f32 samples in 0.0..=1.0 out, and back.

use std::io::Cursor;

use base64::Engine;
use grade_core::ImageBatch;
use thiserror::Error;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("unsupported PNG format: {0}")]
    Unsupported(String),

    #[error("image shape error: {0}")]
    Shape(#[from] grade_core::ImageError),
}

/// Decode a base64 PNG payload (raw base64 or full data URI) into a
/// single-frame image batch.
pub fn decode_base64_png(payload: &str) -> Result<ImageBatch, CodecError> {
    let b64 = payload.strip_prefix(DATA_URI_PREFIX).unwrap_or(payload);
    let bytes = base64::engine::general_purpose::STANDARD.decode(b64.trim())?;
    decode_png(&bytes)
}

/// Decode PNG bytes into a single-frame image batch.
///
/// Accepts 8-bit RGB, RGBA, grayscale, and grayscale-alpha; alpha is
/// dropped and gray is replicated across the three channels.
pub fn decode_png(bytes: &[u8]) -> Result<ImageBatch, CodecError> {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder
        .read_info()
        .map_err(|e| CodecError::PngDecode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| CodecError::PngDecode(e.to_string()))?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(CodecError::Unsupported(format!(
            "bit depth {:?}, only 8-bit is handled",
            info.bit_depth
        )));
    }

    let pixels = &buf[..info.buffer_size()];
    let width = info.width as usize;
    let height = info.height as usize;

    let mut data = Vec::with_capacity(width * height * 3);
    match info.color_type {
        png::ColorType::Rgb => {
            data.extend(pixels.iter().map(|&v| v as f32 / 255.0));
        }
        png::ColorType::Rgba => {
            for px in pixels.chunks_exact(4) {
                data.extend(px[..3].iter().map(|&v| v as f32 / 255.0));
            }
        }
        png::ColorType::Grayscale => {
            for &v in pixels {
                let f = v as f32 / 255.0;
                data.extend_from_slice(&[f, f, f]);
            }
        }
        png::ColorType::GrayscaleAlpha => {
            for px in pixels.chunks_exact(2) {
                let f = px[0] as f32 / 255.0;
                data.extend_from_slice(&[f, f, f]);
            }
        }
        other => {
            return Err(CodecError::Unsupported(format!("color type {other:?}")));
        }
    }

    Ok(ImageBatch::new(1, height, width, data)?)
}

/// Encode the first frame of a batch as PNG bytes.
pub fn encode_png(image: &ImageBatch) -> Result<Vec<u8>, CodecError> {
    let width = image.width();
    let height = image.height();

    // Only the first frame goes over the wire; batches are squeezed here.
    let frame = &image.data()[..width * height * ImageBatch::CHANNELS];
    let rgb8: Vec<u8> = frame
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width as u32, height as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&rgb8)
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
    }
    Ok(out)
}

/// Encode the first frame of a batch as a PNG data URI.
pub fn encode_data_uri(image: &ImageBatch) -> Result<String, CodecError> {
    let png_bytes = encode_png(image)?;
    let b64 = base64::engine::general_purpose::STANDARD.encode(&png_bytes);
    Ok(format!("{DATA_URI_PREFIX}{b64}"))
}
