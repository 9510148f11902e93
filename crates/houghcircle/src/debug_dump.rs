//! Serializable accumulator snapshots for external visualization.
//!
//! The core never interprets visualization requests; it only exposes the
//! raw vote grid (versioned JSON schema) and a normalized image rendering
//! that external viewers can display directly.

use image::{GrayImage, ImageBuffer, Luma};
use serde::{Deserialize, Serialize};

use crate::Accumulator;

pub const DEBUG_SCHEMA_V1: &str = "houghcircle.debug.v1";

/// Raw accumulator contents for one radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccumulatorDump {
    pub schema_version: String,
    /// Radius the accumulator was voted for.
    pub radius: u32,
    /// Accumulator cell size in pixels.
    pub cell_step: f32,
    /// Coordinate shift applied to both axes, in cells.
    pub shift: i64,
    /// Grid width.
    pub dim_a: usize,
    /// Grid height.
    pub dim_b: usize,
    /// Row-major vote counts (`b * dim_a + a`).
    pub counts: Vec<u32>,
}

impl From<&Accumulator> for AccumulatorDump {
    fn from(acc: &Accumulator) -> Self {
        Self {
            schema_version: DEBUG_SCHEMA_V1.to_string(),
            radius: acc.radius(),
            cell_step: acc.cell_step(),
            shift: acc.shift(),
            dim_a: acc.dim_a(),
            dim_b: acc.dim_b(),
            counts: acc.counts().to_vec(),
        }
    }
}

/// Render the accumulator normalized by its maximum into `[0, 1]` floats.
///
/// An all-zero accumulator renders as all zeros.
pub fn normalized_image(acc: &Accumulator) -> ImageBuffer<Luma<f32>, Vec<f32>> {
    let max = acc.counts().iter().copied().max().unwrap_or(0).max(1) as f32;
    let data = acc.counts().iter().map(|&v| v as f32 / max).collect();
    ImageBuffer::from_raw(acc.dim_a() as u32, acc.dim_b() as u32, data)
        .expect("accumulator dimensions match buffer length")
}

/// Render the accumulator normalized by its maximum into an 8-bit image.
pub fn normalized_gray(acc: &Accumulator) -> GrayImage {
    let max = acc.counts().iter().copied().max().unwrap_or(0).max(1) as f32;
    let data = acc
        .counts()
        .iter()
        .map(|&v| (v as f32 / max * 255.0).round() as u8)
        .collect();
    GrayImage::from_raw(acc.dim_a() as u32, acc.dim_b() as u32, data)
        .expect("accumulator dimensions match buffer length")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::draw_circle_outline;
    use crate::vote;

    #[test]
    fn dump_round_trips_through_json() {
        let edge = draw_circle_outline(40, 40, [20.0, 20.0], 8.0);
        let acc = vote(&edge, 8, 1.0, 4.0).unwrap();

        let dump = AccumulatorDump::from(&acc);
        assert_eq!(dump.schema_version, DEBUG_SCHEMA_V1);
        assert_eq!(dump.counts.len(), dump.dim_a * dump.dim_b);

        let json = serde_json::to_string(&dump).unwrap();
        let back: AccumulatorDump = serde_json::from_str(&json).unwrap();
        assert_eq!(back.counts, dump.counts);
        assert_eq!(back.radius, 8);
    }

    #[test]
    fn normalization_maps_the_maximum_to_one() {
        let edge = draw_circle_outline(40, 40, [20.0, 20.0], 8.0);
        let acc = vote(&edge, 8, 1.0, 4.0).unwrap();

        let img = normalized_image(&acc);
        let max = img.as_raw().iter().cloned().fold(0.0f32, f32::max);
        approx::assert_relative_eq!(max, 1.0);

        let gray = normalized_gray(&acc);
        assert_eq!(gray.as_raw().iter().copied().max(), Some(255));
    }

    #[test]
    fn empty_accumulator_renders_as_zeros() {
        let edge = GrayImage::new(30, 30);
        let acc = vote(&edge, 5, 1.0, 1.0).unwrap();
        assert!(normalized_image(&acc).as_raw().iter().all(|&v| v == 0.0));
        assert!(normalized_gray(&acc).as_raw().iter().all(|&v| v == 0));
    }
}
