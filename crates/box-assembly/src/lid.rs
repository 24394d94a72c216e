//! Insert and cover lids, built plate-down in their own frame.

use box_layout::{LayoutPlan, LidParts, PartSize};
use box_types::FormParameters;
use csg_kernel::SolidHandle;
use tracing::instrument;

use crate::boolean::{execute_boolean, BooleanKind, Operand};
use crate::kernel_ext::KernelBundle;
use crate::rounded::part_prism;
use crate::types::{AssemblyError, AssemblyOptions, Diagnostics};

/// Build the lid for the active variant.
#[instrument(skip_all, fields(lid_type = ?plan.parts.lid.lid_type()))]
pub fn build_lid(
    kb: &mut dyn KernelBundle,
    plan: &LayoutPlan,
    params: &FormParameters,
    options: &AssemblyOptions,
    diagnostics: &mut Diagnostics,
) -> Result<SolidHandle, AssemblyError> {
    let lid = match &plan.parts.lid {
        LidParts::Insert {
            wall_outer,
            wall_inner,
            top_outer,
            cutout,
        } => build_insert_lid(
            kb,
            [wall_outer, wall_inner, top_outer],
            plan.segments,
            *cutout,
            options,
            diagnostics,
        )?,
        LidParts::Cover {
            wall_outer,
            wall_inner,
            seat_inner,
        } => build_cover_lid(
            kb,
            [wall_outer, wall_inner, seat_inner],
            plan.segments,
            params.lid_inner_depth > 0.0,
            options,
            diagnostics,
        )?,
    };
    lid.into_solid().ok_or(AssemblyError::EmptyPart { part: "lid" })
}

/// `(wall ring − cutout) ∪ plate`. The cutout is skipped entirely when
/// disabled or degenerate, leaving a solid plug.
fn build_insert_lid(
    kb: &mut dyn KernelBundle,
    [wall_outer, wall_inner, top_outer]: [&PartSize; 3],
    segments: u32,
    cutout_enabled: bool,
    options: &AssemblyOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Operand, AssemblyError> {
    let walls = part_prism(kb, wall_outer, segments, options)?;
    if walls.is_empty() {
        diagnostics.warn("insert lid walls have no volume; plate only");
    }

    let cutout = if !cutout_enabled {
        Operand::Empty
    } else if wall_inner.is_degenerate() {
        diagnostics.warn("insert lid cutout has no volume; skipped");
        Operand::Empty
    } else {
        part_prism(kb, wall_inner, segments, options)?
    };
    let walls = execute_boolean(kb, walls, cutout, BooleanKind::Subtract)?;

    let plate = part_prism(kb, top_outer, segments, options)?;
    execute_boolean(kb, walls, plate, BooleanKind::Union)
}

/// `(skirt outer − skirt inner) − seat pocket`.
fn build_cover_lid(
    kb: &mut dyn KernelBundle,
    [wall_outer, wall_inner, seat_inner]: [&PartSize; 3],
    segments: u32,
    seat_enabled: bool,
    options: &AssemblyOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Operand, AssemblyError> {
    let skirt = part_prism(kb, wall_outer, segments, options)?;

    let hollow = if wall_inner.is_degenerate() {
        diagnostics.warn("cover lid skirt has no room inside; skipped");
        Operand::Empty
    } else {
        part_prism(kb, wall_inner, segments, options)?
    };
    let lid = execute_boolean(kb, skirt, hollow, BooleanKind::Subtract)?;

    let seat = if !seat_enabled {
        Operand::Empty
    } else if seat_inner.is_degenerate() {
        diagnostics.warn("cover lid seat has no volume; skipped");
        Operand::Empty
    } else {
        part_prism(kb, seat_inner, segments, options)?
    };
    execute_boolean(kb, lid, seat, BooleanKind::Subtract)
}
