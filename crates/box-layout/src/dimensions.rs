//! Normalising width/depth/height into canonical outer box dimensions.

use box_types::{DimensionType, FormParameters};
use serde::Serialize;

use crate::config::{round_decimals, LayoutConfig};

/// Canonical outer dimensions of the box body (lid excluded) and the
/// clamped values every later stage sizes parts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedDimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub wall_thickness: f64,
    pub floor_thickness: f64,
    pub lid_tolerance: f64,
    /// Corner radius of the outer box. When square corners were requested
    /// this is `-wall_thickness` (plus the wall in INNER and SECTION modes)
    /// and only meaningful together with `square_corners`.
    pub corner_radius: f64,
    /// Set when the requested radius was zero or negative. No part is
    /// rounded then, except the insert lid plate up to its overhang.
    pub square_corners: bool,
    pub internal_wall_thickness: f64,
    pub sections_across: u32,
    pub sections_deep: u32,
}

impl ResolvedDimensions {
    pub fn has_dividers(&self) -> bool {
        self.sections_across > 1 || self.sections_deep > 1
    }
}

/// Resolve raw form parameters into outer box dimensions.
///
/// Never fails. Results are numerically valid but may still describe
/// degenerate parts, which the assembler skips.
pub fn resolve_dimensions(params: &FormParameters, config: &LayoutConfig) -> ResolvedDimensions {
    let internal_wall = params.internal_wall_thickness.max(0.0);
    let section_count = |requested: u32| {
        if internal_wall <= 0.0 {
            1
        } else {
            requested.max(1)
        }
    };
    let sections_across = section_count(params.sections_across);
    let sections_deep = section_count(params.sections_deep);

    let smallest = params.width.min(params.depth);
    let lid_tolerance = params.lid_tolerance.min(smallest / 2.0);

    let wall_thickness = match params.dimension_type {
        DimensionType::Outer => {
            let limit = (smallest - 2.0 * lid_tolerance.max(0.0)) / 2.0 - config.radius_epsilon;
            params
                .wall_thickness
                .min(round_decimals(limit, config.wall_limit_decimals))
        }
        DimensionType::Inner | DimensionType::Section => params.wall_thickness,
    }
    .max(0.0);
    let floor_thickness = params.wall_thickness.max(0.0);

    let square_corners = params.corner_radius <= 0.0;
    let base_radius = if square_corners {
        -wall_thickness
    } else {
        params.corner_radius
    };

    // A lid without a cutout sits on top instead of inside, so the walls grow by its depth.
    let lid_offset = if params.lid_cutout {
        0.0
    } else {
        params.lid_depth
    };
    let cavity_height = params.height + floor_thickness + lid_offset - lid_tolerance;

    let (width, depth, height, corner_radius) = match params.dimension_type {
        DimensionType::Outer => (params.width, params.depth, params.height, base_radius),
        DimensionType::Inner => (
            params.width + 2.0 * wall_thickness,
            params.depth + 2.0 * wall_thickness,
            cavity_height,
            base_radius + wall_thickness,
        ),
        DimensionType::Section => {
            let span = |size: f64, count: u32| {
                (size + internal_wall) * f64::from(count) - internal_wall + 2.0 * wall_thickness
            };
            (
                span(params.width, sections_across),
                span(params.depth, sections_deep),
                cavity_height,
                base_radius + wall_thickness,
            )
        }
    };

    ResolvedDimensions {
        width,
        depth,
        height,
        wall_thickness,
        floor_thickness,
        lid_tolerance,
        corner_radius,
        square_corners,
        internal_wall_thickness: internal_wall,
        sections_across,
        sections_deep,
    }
}
