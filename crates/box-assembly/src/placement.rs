//! Moving built parts into the final arrangement and the cross-section cut.

use box_layout::{cross_section_cutter, PlacementTransform};
use csg_kernel::SolidHandle;

use crate::kernel_ext::KernelBundle;
use crate::types::AssemblyError;

/// Rotate about the origin, then translate. Identity steps are skipped.
pub fn place_part(
    kb: &mut dyn KernelBundle,
    solid: SolidHandle,
    transform: &PlacementTransform,
) -> Result<SolidHandle, AssemblyError> {
    let mut placed = solid;
    if transform.is_rotated() {
        placed = kb.rotate(&placed, transform.rotation)?;
    }
    if transform.translation.iter().any(|&t| t != 0.0) {
        placed = kb.translate(&placed, transform.translation)?;
    }
    Ok(placed)
}

/// Remove one quadrant (`x ≥ cx, y ≤ cy`) of a placed part.
pub fn apply_cross_section(
    kb: &mut dyn KernelBundle,
    solid: &SolidHandle,
    extent: f64,
    transform: &PlacementTransform,
) -> Result<SolidHandle, AssemblyError> {
    let cutter = cross_section_cutter(extent, transform);
    let cutter = kb.cuboid(cutter.size, cutter.center)?;
    Ok(kb.boolean_subtract(solid, &cutter)?)
}
