//! Tessellation-backed queries on truck solids.
//!
//! truck keeps exact NURBS geometry, so extents of curved faces are taken
//! from a triangulation rather than from the topology's vertices.

use crate::types::{BoundingBox, KernelError};
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};

type TruckSolid = truck_modeling::Solid;

/// Axis-aligned bounds of a solid's triangulation at `tolerance`.
pub fn bounding_box(solid: &TruckSolid, tolerance: f64) -> Result<BoundingBox, KernelError> {
    let mesh = solid.triangulation(tolerance).to_polygon();
    BoundingBox::from_points(mesh.positions().iter().map(|p| [p[0], p[1], p[2]])).ok_or_else(
        || KernelError::TessellationFailed {
            reason: "triangulation produced no vertices".to_string(),
        },
    )
}
