//! Circle Hough voting for one fixed radius.
//!
//! Every foreground pixel votes for every candidate center lying `radius`
//! pixels away along the sampled angles: for the correct radius, the true
//! center collects votes from the whole outline and dominates the
//! accumulator.

use image::GrayImage;

use crate::accumulator::Accumulator;
use crate::params::{check_angle_step, check_cell_step};
use crate::ParamError;

/// Build the vote accumulator for `radius`.
///
/// `cell_step` is the accumulator cell size in pixels, `angle_step` the
/// angular sampling in degrees over `[0, 360)`. Vote counts are independent
/// of pixel traversal order; identical inputs produce identical
/// accumulators.
///
/// Cost is O(foreground pixels x 360 / angle_step).
pub fn vote(
    edge: &GrayImage,
    radius: u32,
    cell_step: f32,
    angle_step: f32,
) -> Result<Accumulator, ParamError> {
    if radius == 0 {
        return Err(ParamError::ZeroRadius);
    }
    check_cell_step(cell_step)?;
    check_angle_step(angle_step)?;

    let (w, h) = edge.dimensions();
    let mut acc = Accumulator::new(w, h, radius, cell_step);

    // Per-angle cell offsets are independent of the voting pixel.
    let r = radius as f32;
    let mut offsets = Vec::new();
    let mut phi = 0.0f32;
    while phi < 360.0 {
        let rad = phi.to_radians();
        let da = (r * rad.cos() / cell_step).round() as i64;
        let db = (r * rad.sin() / cell_step).round() as i64;
        offsets.push((da, db));
        phi += angle_step;
    }

    let stride = w as usize;
    let raw = edge.as_raw();
    for y in 0..h as usize {
        let row = &raw[y * stride..(y + 1) * stride];
        let base_b = (y as f32 / cell_step).round() as i64;
        for (x, &pix) in row.iter().enumerate() {
            if pix == 0 {
                continue;
            }
            let base_a = (x as f32 / cell_step).round() as i64;
            for &(da, db) in &offsets {
                acc.add_vote(base_a - da, base_b - db);
            }
        }
    }

    Ok(acc)
}
