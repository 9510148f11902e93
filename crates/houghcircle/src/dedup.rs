//! Cross-radius merging of circle candidates.
//!
//! A correct circle typically peaks at consecutive radii with growing vote
//! counts, so a detection at radius `r` and one at `r - 1` with nearby
//! centers are treated as the same physical circle.

use crate::CircleCandidate;

/// Center tolerance (pixels, per axis) for treating two candidates as the
/// same circle.
const CENTER_TOL: i32 = 4;

/// Merge `cand` into `list`, deduplicating against existing entries.
///
/// The first entry `e` with `e.r` equal to `cand.r` or `cand.r - 1` and
/// both center coordinates within 4 pixels is considered the same
/// circle: the higher-vote version wins, overwriting the entry in
/// place (ties go to `cand`). Without a match, `cand` is appended. The
/// list therefore holds at most one entry per physical circle under the
/// tolerance.
pub fn merge_candidate(list: &mut Vec<CircleCandidate>, cand: CircleCandidate) {
    for item in list.iter_mut() {
        let radius_match = item.r == cand.r || item.r.saturating_add(1) == cand.r;
        if radius_match
            && (item.x - cand.x).abs() <= CENTER_TOL
            && (item.y - cand.y).abs() <= CENTER_TOL
        {
            if item.v <= cand.v {
                *item = cand;
            }
            return;
        }
    }
    list.push(cand);
}
