//! Aspect-preserving bilinear resize for preview rendering.

use crate::image::ImageBatch;

/// Compute target dimensions that fit `(width, height)` into a bounding box
/// while preserving aspect ratio.
///
/// The axis with the larger scale-down ratio becomes the bound; the other
/// dimension is derived from the aspect ratio and rounded. Images smaller
/// than the box are scaled up to it, matching the preview contract of
/// always rendering at the box size.
pub fn fit_within(width: usize, height: usize, max_w: usize, max_h: usize) -> (usize, usize) {
    let aspect = width as f32 / height as f32;

    if width as f32 / max_w as f32 > height as f32 / max_h as f32 {
        let target_h = (max_w as f32 / aspect).round() as usize;
        (max_w, target_h.max(1))
    } else {
        let target_w = (max_h as f32 * aspect).round() as usize;
        (target_w.max(1), max_h)
    }
}

/// Resize a whole batch into the bounding box with bilinear sampling.
pub fn downscale_to_fit(image: &ImageBatch, max_w: usize, max_h: usize) -> ImageBatch {
    let (target_w, target_h) = fit_within(image.width(), image.height(), max_w, max_h);
    resize_bilinear(image, target_w, target_h)
}

/// Bilinear resample to exact dimensions.
///
/// Sample positions follow the half-pixel-center convention:
/// `src = (dst + 0.5) * scale - 0.5`, clamped to the source extent.
pub fn resize_bilinear(image: &ImageBatch, new_w: usize, new_h: usize) -> ImageBatch {
    if new_w == image.width() && new_h == image.height() {
        return image.clone();
    }

    let src_w = image.width();
    let src_h = image.height();
    let scale_x = src_w as f32 / new_w as f32;
    let scale_y = src_h as f32 / new_h as f32;

    let mut data = Vec::with_capacity(image.batch() * new_h * new_w * ImageBatch::CHANNELS);
    for frame in 0..image.batch() {
        for dy in 0..new_h {
            let sy = ((dy as f32 + 0.5) * scale_y - 0.5).max(0.0);
            let y0 = (sy.floor() as usize).min(src_h - 1);
            let y1 = (y0 + 1).min(src_h - 1);
            let wy = sy - y0 as f32;

            for dx in 0..new_w {
                let sx = ((dx as f32 + 0.5) * scale_x - 0.5).max(0.0);
                let x0 = (sx.floor() as usize).min(src_w - 1);
                let x1 = (x0 + 1).min(src_w - 1);
                let wx = sx - x0 as f32;

                for c in 0..ImageBatch::CHANNELS {
                    let top = image.get(frame, y0, x0, c) * (1.0 - wx)
                        + image.get(frame, y0, x1, c) * wx;
                    let bottom = image.get(frame, y1, x0, c) * (1.0 - wx)
                        + image.get(frame, y1, x1, c) * wx;
                    data.push(top * (1.0 - wy) + bottom * wy);
                }
            }
        }
    }

    ImageBatch::new(image.batch(), new_h, new_w, data)
        .expect("resize output length matches target shape")
}
