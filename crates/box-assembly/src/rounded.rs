//! Rounded rectangular prisms: the building block of every box and lid part.

use box_layout::PartSize;
use csg_kernel::{SolidHandle, Vec3};
use tracing::debug;

use crate::boolean::{execute_boolean, union_all, BooleanKind, Operand};
use crate::kernel_ext::KernelBundle;
use crate::types::{AssemblyError, AssemblyOptions, RoundingStrategy};

/// Thickness of the cross cutters that split the corner cylinder. Too thin to see.
const CUTTER_THICKNESS: f64 = 0.005;

/// Build the prism for a sized part, or `Empty` when the part is degenerate.
pub fn part_prism(
    kb: &mut dyn KernelBundle,
    part: &PartSize,
    segments: u32,
    options: &AssemblyOptions,
) -> Result<Operand, AssemblyError> {
    if part.is_degenerate() {
        return Ok(Operand::Empty);
    }
    rounded_prism(kb, part.size, part.center(), part.corner_radius, segments, options)
        .map(Operand::Solid)
}

/// A `size` prism centred on `center` with its vertical edges rounded to `radius`.
///
/// The radius is limited to fit the footprint. A non-positive radius gives a
/// plain cuboid.
pub fn rounded_prism(
    kb: &mut dyn KernelBundle,
    size: Vec3,
    center: Vec3,
    radius: f64,
    segments: u32,
    options: &AssemblyOptions,
) -> Result<SolidHandle, AssemblyError> {
    let radius = options.layout.limit_radius(radius, size[0], size[1]);
    if radius <= 0.0 {
        return Ok(kb.cuboid(size, center)?);
    }
    match options.strategy {
        RoundingStrategy::Extruded => Ok(kb.extrude_rounded_rect(size, center, radius, segments)?),
        RoundingStrategy::ChoppedCylinder => {
            match chopped_cylinder(kb, size, center, radius, segments)? {
                Some(solid) => Ok(solid),
                None => Ok(kb.extrude_rounded_rect(size, center, radius, segments)?),
            }
        }
    }
}

/// Split one cylinder into quadrants, push each to its corner and join them
/// with two filler cuboids.
///
/// Returns `None` when the split does not give exactly four pieces.
fn chopped_cylinder(
    kb: &mut dyn KernelBundle,
    size: Vec3,
    center: Vec3,
    radius: f64,
    segments: u32,
) -> Result<Option<SolidHandle>, AssemblyError> {
    let [w, d, h] = size;
    let cylinder = kb.cylinder(radius, h, center, segments)?;
    let cut_x = kb.cuboid([radius * 4.0, CUTTER_THICKNESS, h * 2.0], center)?;
    let cut_y = kb.cuboid([CUTTER_THICKNESS, radius * 4.0, h * 2.0], center)?;
    let cutters = kb.boolean_union(&cut_x, &cut_y)?;
    let chopped = kb.boolean_subtract(&cylinder, &cutters)?;

    let pieces = kb.scission(&chopped)?;
    if pieces.len() != 4 {
        debug!(pieces = pieces.len(), "corner split failed, extruding instead");
        return Ok(None);
    }

    let reach = [w / 2.0 - radius, d / 2.0 - radius];
    let mut corners = Vec::with_capacity(4);
    for piece in &pieces {
        let mid = kb.as_introspect().bounding_box(piece)?.center();
        let dir = |axis: usize| if mid[axis] > center[axis] { 1.0 } else { -1.0 };
        let moved = kb.translate(piece, [reach[0] * dir(0), reach[1] * dir(1), 0.0])?;
        corners.push(Operand::Solid(moved));
    }

    let filler = radius * 2.0 - CUTTER_THICKNESS;
    let across = kb.cuboid([w - filler, d, h], center)?;
    let deep = kb.cuboid([w, d - filler, h], center)?;
    corners.push(Operand::Solid(across));

    let joined = union_all(kb, corners)?;
    Ok(execute_boolean(kb, joined, Operand::Solid(deep), BooleanKind::Union)?.into_solid())
}
