//! Radius scan: per-radius voting, peak extraction, stopping rule.

use image::GrayImage;

use crate::dedup::merge_candidate;
use crate::vote::vote;
use crate::{CircleCandidate, HoughParams, ParamError};

/// Find circles of unknown center and radius in a binary edge image.
///
/// For every radius in `[radius_min, radius_max]`, ascending, a fresh
/// accumulator is voted and peaks are extracted until one falls below any
/// of three thresholds (strictly-below comparisons; ties survive):
///
/// - the value of the first peak found at the current radius,
/// - the best accepted peak value across all radii scanned so far,
/// - 1 (empty accumulator).
///
/// Accepted peaks become [`CircleCandidate`]s and are merged across radii
/// via [`merge_candidate`]. Note that the cross-radius threshold also gates
/// peaks at radii whose absolute vote counts are legitimately lower, so a
/// weaker valid circle can go unreported once a stronger one has been
/// accepted at a different radius.
///
/// An image with no foreground pixels yields an empty list: the first peak
/// of every radius has value 0, which is below 1. The scan is
/// single-threaded and deterministic; identical inputs produce
/// bit-identical results.
pub fn find_circles(
    edge: &GrayImage,
    params: &HoughParams,
) -> Result<Vec<CircleCandidate>, ParamError> {
    params.validate()?;

    let mut circles = Vec::new();
    let mut best_value_so_far: Option<u32> = None;

    for r in params.radius_min..=params.radius_max {
        let mut acc = vote(edge, r, params.cell_step, params.angle_step)?;

        let mut max_value_this_radius = None;
        let mut accepted = 0usize;
        loop {
            let peak = acc.take_peak();
            let first = *max_value_this_radius.get_or_insert(peak.value);
            let below_best = best_value_so_far.is_some_and(|best| peak.value < best);
            if below_best || peak.value < first || peak.value < 1 {
                break;
            }

            best_value_so_far = Some(peak.value);
            accepted += 1;
            tracing::trace!(x = peak.x, y = peak.y, r, v = peak.value, "peak accepted");
            merge_candidate(
                &mut circles,
                CircleCandidate {
                    x: peak.x,
                    y: peak.y,
                    r,
                    v: peak.value,
                },
            );
        }
        tracing::debug!(
            r,
            max_value = max_value_this_radius.unwrap_or(0),
            accepted,
            "radius scanned"
        );
    }

    tracing::info!("{} circles found", circles.len());
    Ok(circles)
}
