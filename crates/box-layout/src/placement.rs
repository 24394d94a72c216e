//! Where the box and lid end up, and the cross-section cutter.

use std::f64::consts::PI;

use box_types::FormParameters;
use serde::Serialize;

use crate::dimensions::ResolvedDimensions;
use crate::offsets::PartSizes;
use crate::Vec3;

/// How box and lid are arranged relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arrangement {
    /// Side by side on the print bed, lid plate down.
    Separated,
    /// Lid flipped and seated on the box.
    Assembled,
}

impl Arrangement {
    pub fn from_print_mode(is_print_mode: bool) -> Self {
        if is_print_mode {
            Self::Separated
        } else {
            Self::Assembled
        }
    }
}

/// Rotation (Euler radians, X then Y then Z, about the origin) followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementTransform {
    pub translation: Vec3,
    pub rotation: Vec3,
}

impl PlacementTransform {
    pub fn identity() -> Self {
        Self::translation([0.0; 3])
    }

    pub fn translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: [0.0; 3],
        }
    }

    pub fn is_rotated(&self) -> bool {
        self.rotation.iter().any(|&a| a != 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placements {
    pub arrangement: Arrangement,
    pub box_part: PlacementTransform,
    pub lid: PlacementTransform,
}

/// Compute the box and lid transforms for the requested arrangement.
pub fn resolve_placements(
    dims: &ResolvedDimensions,
    parts: &PartSizes,
    params: &FormParameters,
) -> Placements {
    let arrangement = Arrangement::from_print_mode(params.is_print_mode);
    let gap = params.spacing / 2.0;
    let (box_part, lid) = match arrangement {
        Arrangement::Separated => (
            PlacementTransform::translation([-dims.width / 2.0 - gap, 0.0, 0.0]),
            PlacementTransform::translation([parts.lid_half_width() + gap, 0.0, 0.0]),
        ),
        Arrangement::Assembled => (
            PlacementTransform::identity(),
            PlacementTransform {
                translation: [
                    0.0,
                    0.0,
                    dims.height + dims.lid_tolerance + params.lid_thickness,
                ],
                rotation: [0.0, PI, 0.0],
            },
        ),
    };
    Placements {
        arrangement,
        box_part,
        lid,
    }
}

/// An axis-aligned box to subtract from a placed part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutterBox {
    pub size: Vec3,
    pub center: Vec3,
}

/// Edge length of the cross-section cutter cube: three times the largest
/// extent of the whole arrangement.
pub fn cross_section_extent(
    dims: &ResolvedDimensions,
    parts: &PartSizes,
    params: &FormParameters,
) -> f64 {
    let span = dims.width + params.spacing.max(0.0) + 2.0 * parts.lid_half_width();
    let tall = dims.height + dims.lid_tolerance.max(0.0) + params.lid_thickness + params.lid_depth;
    let deepest = parts
        .iter()
        .map(|(_, part)| part.size[1])
        .fold(dims.depth, f64::max);
    3.0 * span.max(deepest).max(tall)
}

/// Cutter removing the `x ≥ cx, y ≤ cy` quadrant around a part placed by `placement`.
pub fn cross_section_cutter(extent: f64, placement: &PlacementTransform) -> CutterBox {
    let [cx, cy, _] = placement.translation;
    CutterBox {
        size: [extent; 3],
        center: [cx + extent / 2.0, cy - extent / 2.0, 0.0],
    }
}
