//! Per-part sizes derived from the resolved dimensions.
//!
//! Every part is a rounded rectangular prism whose footprint is the outer
//! box footprint grown (or shrunk) by a size offset on both axes. Its corner
//! radius follows the same offset so nested parts stay concentric.
//!
//! Lids are sized in their own construction frame: the lid plate occupies
//! `z ∈ [0, lid_thickness]` and walls rise above it.

use box_types::{FormParameters, LidType, PartId};
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::dimensions::ResolvedDimensions;
use crate::Vec3;

/// Size and corner radius of one part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartSize {
    /// Amount added to the outer box width and depth.
    pub size_offset: f64,
    pub size: Vec3,
    /// Height of the part's centre in its construction frame. Parts are centred on X/Y.
    pub center_z: f64,
    /// Limited and rounded radius. 0 means square corners.
    pub corner_radius: f64,
}

impl PartSize {
    pub fn z_height(&self) -> f64 {
        self.size[2]
    }

    pub fn center(&self) -> Vec3 {
        [0.0, 0.0, self.center_z]
    }

    /// True when any axis is non-positive. Such parts must never reach the kernel.
    pub fn is_degenerate(&self) -> bool {
        !self.size.iter().all(|&s| s > 0.0 && s.is_finite())
    }
}

/// Sizes of the parts specific to each lid variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LidParts {
    Insert {
        wall_outer: PartSize,
        wall_inner: PartSize,
        top_outer: PartSize,
        /// Whether `wall_inner` is cut out of the wall ring at all.
        cutout: bool,
    },
    Cover {
        wall_outer: PartSize,
        wall_inner: PartSize,
        seat_inner: PartSize,
    },
}

impl LidParts {
    pub fn lid_type(&self) -> LidType {
        match self {
            LidParts::Insert { .. } => LidType::Insert,
            LidParts::Cover { .. } => LidType::Cover,
        }
    }
}

/// All part sizes for one call, keyed by the closed set of [`PartId`]s
/// active for the chosen lid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PartSizes {
    pub box_outer: PartSize,
    pub box_inner: PartSize,
    pub lid: LidParts,
}

impl PartSizes {
    pub fn get(&self, id: PartId) -> Option<&PartSize> {
        match (id, &self.lid) {
            (PartId::BoxOuter, _) => Some(&self.box_outer),
            (PartId::BoxInner, _) => Some(&self.box_inner),
            (PartId::InsertLidWallOuter, LidParts::Insert { wall_outer, .. }) => Some(wall_outer),
            (
                PartId::InsertLidWallInner,
                LidParts::Insert {
                    wall_inner,
                    cutout: true,
                    ..
                },
            ) => Some(wall_inner),
            (PartId::InsertLidTopOuter, LidParts::Insert { top_outer, .. }) => Some(top_outer),
            (PartId::CoverLidWallOuter, LidParts::Cover { wall_outer, .. }) => Some(wall_outer),
            (PartId::CoverLidWallInner, LidParts::Cover { wall_inner, .. }) => Some(wall_inner),
            (PartId::CoverLidSeatInner, LidParts::Cover { seat_inner, .. }) => Some(seat_inner),
            _ => None,
        }
    }

    /// Active parts in [`PartId::for_lid`] order. A disabled insert cutout
    /// is not active.
    pub fn iter(&self) -> impl Iterator<Item = (PartId, &PartSize)> + '_ {
        PartId::for_lid(self.lid.lid_type())
            .iter()
            .filter_map(move |&id| self.get(id).map(|size| (id, size)))
    }

    /// Largest effective corner radius among the non-degenerate parts.
    pub fn largest_radius(&self) -> f64 {
        self.iter()
            .filter(|(_, part)| !part.is_degenerate())
            .map(|(_, part)| part.corner_radius)
            .fold(0.0, f64::max)
    }

    /// Half the width of the widest lid part.
    pub fn lid_half_width(&self) -> f64 {
        self.iter()
            .filter(|(id, part)| id.is_lid_part() && !part.is_degenerate())
            .map(|(_, part)| part.size[0] / 2.0)
            .fold(0.0, f64::max)
    }
}

/// Expand resolved dimensions into the size of every active part.
pub fn calculate_offsets(
    dims: &ResolvedDimensions,
    params: &FormParameters,
    config: &LayoutConfig,
) -> PartSizes {
    let wall = dims.wall_thickness;
    let tol = dims.lid_tolerance;
    let lid_thick = params.lid_thickness;
    let lid_depth = params.lid_depth;

    let part = |offset: f64, z_height: f64, center_z: f64, min_radius: f64| {
        let (w, d) = (dims.width + offset, dims.depth + offset);
        let following = if dims.square_corners {
            0.0
        } else {
            dims.corner_radius + offset / 2.0
        };
        let radius = following.max(min_radius).max(0.0);
        PartSize {
            size_offset: offset,
            size: [w, d, z_height],
            center_z,
            corner_radius: config.round_radius(config.limit_radius(radius, w, d)),
        }
    };

    let box_outer = part(0.0, dims.height, dims.height / 2.0, 0.0);
    let box_inner = part(
        -2.0 * wall,
        dims.height,
        dims.height / 2.0 + dims.floor_thickness,
        0.0,
    );

    let lid = match params.lid_type {
        LidType::Insert => {
            let wall_offset = -2.0 * wall - 2.0 * tol;
            LidParts::Insert {
                wall_outer: part(wall_offset, lid_depth, lid_thick + lid_depth / 2.0, 0.0),
                // Tall enough to cut through the wall ring; the plate is unioned back afterwards.
                wall_inner: part(
                    wall_offset - 2.0 * params.lid_wall_thickness,
                    dims.height * 3.0,
                    lid_thick / 2.0 + lid_depth / 2.0,
                    0.0,
                ),
                // The plate is always rounded to at least the overhang.
                top_outer: part(
                    2.0 * params.lid_overhang,
                    lid_thick,
                    lid_thick / 2.0,
                    params.lid_overhang,
                ),
                cutout: params.lid_cutout,
            }
        }
        LidType::Cover => {
            let seat_depth = params.lid_inner_depth.min(lid_thick / 2.0).max(0.0);
            let seat_height = if seat_depth > 0.0 {
                seat_depth + lid_depth
            } else {
                0.0
            };
            LidParts::Cover {
                wall_outer: part(
                    2.0 * (tol + params.lid_wall_thickness),
                    lid_thick + lid_depth,
                    (lid_thick + lid_depth) / 2.0,
                    0.0,
                ),
                // Starts at the plate's inner face and overshoots the skirt's rim.
                wall_inner: part(2.0 * tol, 2.0 * lid_depth, lid_thick + lid_depth, 0.0),
                seat_inner: part(
                    -2.0 * wall,
                    seat_height,
                    lid_thick - seat_depth + seat_height / 2.0,
                    0.0,
                ),
            }
        }
    };

    PartSizes {
        box_outer,
        box_inner,
        lid,
    }
}
