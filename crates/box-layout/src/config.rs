//! Tunables for the sizing math.

use box_types::RenderMode;

/// Bounds for the rounded-corner segment count in one render mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLimits {
    /// Target arc length of one segment (mm).
    pub resolution: f64,
    /// Lower bound on the segment count. Rounded up to a multiple of 4 when applied.
    pub min: u32,
    /// Upper bound on the segment count. Rounded down to a multiple of 4 when applied.
    pub max: u32,
}

impl SegmentLimits {
    /// Coarse arcs for the interactive path.
    pub fn preview() -> Self {
        Self {
            resolution: 1.5,
            min: 8,
            max: 48,
        }
    }

    /// Print-quality arcs for the export path.
    pub fn export() -> Self {
        Self {
            resolution: 0.1,
            min: 8,
            max: 512,
        }
    }
}

/// Configuration for dimension resolution, part sizing and segment selection.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Margin kept between a corner radius and half the part's smallest edge (mm).
    /// Absolute, not scaled with the model.
    pub radius_epsilon: f64,
    /// Decimal places every corner radius is rounded to before it reaches the kernel.
    pub radius_decimals: i32,
    /// Decimal places kept on the outer-dimension wall thickness limit.
    pub wall_limit_decimals: i32,
    pub preview: SegmentLimits,
    pub export: SegmentLimits,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius_epsilon: 0.01,
            radius_decimals: 6,
            wall_limit_decimals: 2,
            preview: SegmentLimits::preview(),
            export: SegmentLimits::export(),
        }
    }
}

impl LayoutConfig {
    pub fn segment_limits(&self, mode: RenderMode) -> SegmentLimits {
        match mode {
            RenderMode::Preview => self.preview,
            RenderMode::Export => self.export,
        }
    }

    /// Round a radius to the configured precision.
    pub fn round_radius(&self, radius: f64) -> f64 {
        round_decimals(radius, self.radius_decimals)
    }

    /// Clamp a requested corner radius so it fits a `x_size` × `y_size` footprint.
    ///
    /// Non-positive requests mean "no rounding" and come back as 0.
    pub fn limit_radius(&self, radius: f64, x_size: f64, y_size: f64) -> f64 {
        if radius <= 0.0 || !radius.is_finite() {
            return 0.0;
        }
        let max_radius = x_size.min(y_size) / 2.0 - self.radius_epsilon;
        radius.min(max_radius).max(0.0)
    }
}

/// Round `value` to `decimals` decimal places.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
