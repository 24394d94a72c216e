//! Builds the box and lid solids from a [`LayoutPlan`] through the CSG kernel.

pub mod boolean;
pub mod kernel_ext;
pub mod lid;
pub mod placement;
pub mod rounded;
pub mod shell;
pub mod types;

pub use boolean::{execute_boolean, union_all, BooleanKind, Operand};
pub use kernel_ext::KernelBundle;
pub use lid::build_lid;
pub use placement::{apply_cross_section, place_part};
pub use rounded::{part_prism, rounded_prism};
pub use shell::{build_box, divider_layout, max_divider_height, Divider};
pub use types::*;

use box_layout::LayoutPlan;
use box_types::FormParameters;
use tracing::{debug, instrument};

/// Build, place and (optionally) cross-section the box and lid.
#[instrument(skip_all, fields(segments = plan.segments))]
pub fn assemble(
    kb: &mut dyn KernelBundle,
    plan: &LayoutPlan,
    params: &FormParameters,
    options: &AssemblyOptions,
) -> Result<AssembledParts, AssemblyError> {
    let mut diagnostics = Diagnostics {
        segments: plan.segments,
        ..Diagnostics::default()
    };

    let body = build_box(kb, plan, params, options, &mut diagnostics)?;
    let lid = build_lid(kb, plan, params, options, &mut diagnostics)?;

    let placements = &plan.placements;
    let mut box_solid = place_part(kb, body, &placements.box_part)?;
    let mut lid_solid = place_part(kb, lid, &placements.lid)?;

    if let Some(extent) = plan.cross_section {
        debug!(extent, "applying cross-section");
        box_solid = apply_cross_section(kb, &box_solid, extent, &placements.box_part)?;
        lid_solid = apply_cross_section(kb, &lid_solid, extent, &placements.lid)?;
    }

    Ok(AssembledParts {
        box_solid,
        lid_solid,
        diagnostics,
    })
}
