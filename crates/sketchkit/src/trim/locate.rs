//! Boundary-segment lookup for trim ratios.
//!
//! The two scans run in opposite directions: a start ratio that
//! sits exactly on a junction resolves to the segment after it, an end ratio
//! to the segment before it. A zero-length query on a junction therefore
//! stays on the junction vertex instead of spanning two segments.

use super::types::PathSegment;

/// Index of the last segment whose `previous_ratio <= ratio`, or 0.
pub fn locate_start(ratio: f64, segments: &[PathSegment]) -> usize {
    segments
        .iter()
        .rposition(|s| s.previous_ratio <= ratio)
        .unwrap_or(0)
}

/// Index of the first segment whose `next_ratio >= ratio`, or the last index.
pub fn locate_end(ratio: f64, segments: &[PathSegment]) -> usize {
    segments
        .iter()
        .position(|s| ratio <= s.next_ratio)
        .unwrap_or(segments.len().saturating_sub(1))
}
