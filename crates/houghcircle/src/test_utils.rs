//! Shared test utilities for synthetic edge images.

use image::{GrayImage, Luma};

/// Render a one-pixel-wide circle outline as a binary edge image.
///
/// Pixels whose distance `d` from `center` satisfies `|d - radius| <= 0.5`
/// are set to 255, everything else stays 0. `center` may lie outside the
/// image to produce clipped arcs.
pub(crate) fn draw_circle_outline(w: u32, h: u32, center: [f32; 2], radius: f32) -> GrayImage {
    let mut img = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - center[0];
            let dy = y as f32 - center[1];
            let d = (dx * dx + dy * dy).sqrt();
            if (d - radius).abs() <= 0.5 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
    }
    img
}
