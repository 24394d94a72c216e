//! Rounded-corner tessellation density.

use std::f64::consts::PI;

use crate::config::SegmentLimits;

/// Segment count for a full circle of `radius`.
///
/// Always a multiple of 4 (the chopped-cylinder corner builder splits one
/// cylinder into four quadrants) and within the mode's limits.
pub fn calculate_segments(limits: &SegmentLimits, radius: f64) -> u32 {
    let min = limits.min.div_ceil(4) * 4;
    let max = (limits.max / 4 * 4).max(min);

    let resolution = if limits.resolution.is_finite() {
        limits.resolution.max(0.0)
    } else {
        0.0
    };
    if resolution == 0.0 {
        return max;
    }

    let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
    let circumference = 2.0 * PI * radius;
    // Capped before the cast so huge radii cannot overflow.
    let raw = (circumference / resolution).ceil().min(f64::from(max)) as u32;
    (raw.div_ceil(4) * 4).clamp(min, max)
}
