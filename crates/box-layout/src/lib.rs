//! Sizing math for the storage box: everything that can be decided before
//! the CSG kernel is involved.
//!
//! `plan_layout` runs dimension resolution, part sizing, segment selection
//! and placement in order and returns one immutable [`LayoutPlan`].

pub mod config;
pub mod dimensions;
pub mod offsets;
pub mod placement;
pub mod segments;

pub use config::{LayoutConfig, SegmentLimits};
pub use dimensions::{resolve_dimensions, ResolvedDimensions};
pub use offsets::{calculate_offsets, LidParts, PartSize, PartSizes};
pub use placement::{
    cross_section_cutter, cross_section_extent, resolve_placements, Arrangement, CutterBox,
    PlacementTransform, Placements,
};
pub use segments::calculate_segments;

use box_types::{FormParameters, RenderMode};
use serde::Serialize;
use tracing::{debug, instrument};

/// A point or vector in model space (millimetres).
pub type Vec3 = [f64; 3];

/// Everything the assembler needs, computed fresh for one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub dimensions: ResolvedDimensions,
    pub parts: PartSizes,
    pub segments: u32,
    pub placements: Placements,
    /// Edge of the cross-section cutter cube. Only set for previews with
    /// cross-section mode on.
    pub cross_section: Option<f64>,
}

#[instrument(skip_all, fields(dimension_type = ?params.dimension_type, lid_type = ?params.lid_type, mode = ?mode))]
pub fn plan_layout(params: &FormParameters, mode: RenderMode, config: &LayoutConfig) -> LayoutPlan {
    let dimensions = resolve_dimensions(params, config);
    debug!(
        width = dimensions.width,
        depth = dimensions.depth,
        height = dimensions.height,
        wall = dimensions.wall_thickness,
        lid_tolerance = dimensions.lid_tolerance,
        "resolved dimensions"
    );

    let parts = calculate_offsets(&dimensions, params, config);
    let largest_radius = parts.largest_radius();
    let segments = calculate_segments(&config.segment_limits(mode), largest_radius);
    debug!(largest_radius, segments, "segment count");

    let placements = resolve_placements(&dimensions, &parts, params);
    let cross_section = (params.is_cross_section_mode && mode.is_preview())
        .then(|| cross_section_extent(&dimensions, &parts, params));

    LayoutPlan {
        dimensions,
        parts,
        segments,
        placements,
        cross_section,
    }
}
