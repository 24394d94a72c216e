//! The box body: a rounded shell with optional compartment dividers.

use box_layout::{LayoutPlan, ResolvedDimensions, Vec3};
use box_types::{FormParameters, LidType};
use csg_kernel::SolidHandle;
use tracing::{debug, instrument};

use crate::boolean::{execute_boolean, union_all, BooleanKind, Operand};
use crate::kernel_ext::KernelBundle;
use crate::rounded::part_prism;
use crate::types::{AssemblyError, AssemblyOptions, Diagnostics};

/// One internal divider wall, in the box's construction frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    pub size: Vec3,
    pub center: Vec3,
}

/// Tallest a divider may be without fouling the lid.
pub fn max_divider_height(dims: &ResolvedDimensions, params: &FormParameters) -> f64 {
    let above_floor = dims.height - dims.floor_thickness;
    match params.lid_type {
        LidType::Insert => above_floor - params.lid_depth - dims.lid_tolerance,
        LidType::Cover => above_floor,
    }
}

/// Evenly spaced dividers across and along the cavity.
///
/// Each divider is one wall thickness longer than the cavity so it meets the
/// walls. Returns nothing when the allowed height is not positive.
pub fn divider_layout(plan: &LayoutPlan, params: &FormParameters) -> Vec<Divider> {
    let dims = &plan.dimensions;
    let height = params
        .internal_wall_height
        .min(max_divider_height(dims, params));
    if height <= 0.0 || !dims.has_dividers() {
        return Vec::new();
    }

    let [inner_w, inner_d, _] = plan.parts.box_inner.size;
    let thickness = dims.internal_wall_thickness;
    let z = height / 2.0 + dims.floor_thickness;
    let positions = |inner: f64, count: u32| {
        let total = inner + thickness;
        (1..count).map(move |i| total / f64::from(count) * f64::from(i) - total / 2.0)
    };

    let across = positions(inner_w, dims.sections_across).map(|x| Divider {
        size: [thickness, inner_d + dims.wall_thickness, height],
        center: [x, 0.0, z],
    });
    let deep = positions(inner_d, dims.sections_deep).map(|y| Divider {
        size: [inner_w + dims.wall_thickness, thickness, height],
        center: [0.0, y, z],
    });
    across.chain(deep).collect()
}

/// Build the box body in its construction frame (base on z = 0, centred on X/Y).
#[instrument(skip_all, fields(segments = plan.segments))]
pub fn build_box(
    kb: &mut dyn KernelBundle,
    plan: &LayoutPlan,
    params: &FormParameters,
    options: &AssemblyOptions,
    diagnostics: &mut Diagnostics,
) -> Result<SolidHandle, AssemblyError> {
    let parts = &plan.parts;
    let dims = &plan.dimensions;
    // With neither walls nor floor the cavity swallows the whole body.
    if dims.wall_thickness <= 0.0 && dims.floor_thickness <= 0.0 {
        return Err(AssemblyError::EmptyPart { part: "box" });
    }
    let Operand::Solid(outer) = part_prism(kb, &parts.box_outer, plan.segments, options)? else {
        return Err(AssemblyError::EmptyPart { part: "box" });
    };

    let cavity_degenerate =
        parts.box_inner.is_degenerate() || dims.floor_thickness >= dims.height;
    let inner = if cavity_degenerate {
        diagnostics.warn("box cavity has no volume; building a solid block");
        Operand::Empty
    } else {
        part_prism(kb, &parts.box_inner, plan.segments, options)?
    };
    let mut body = execute_boolean(kb, outer.clone().into(), inner, BooleanKind::Subtract)?;

    let dividers = if cavity_degenerate {
        Vec::new()
    } else {
        divider_layout(plan, params)
    };
    if dims.has_dividers() && dividers.is_empty() {
        diagnostics.warn("no room for compartment dividers; skipped");
    }
    if !dividers.is_empty() {
        debug!(count = dividers.len(), "adding dividers");
        let mut walls = Vec::with_capacity(dividers.len() + 1);
        walls.push(body);
        for divider in &dividers {
            walls.push(kb.cuboid(divider.size, divider.center)?.into());
        }
        body = union_all(kb, walls)?;
        // Dividers reach into the walls; clip them to the rounded outline.
        body = execute_boolean(kb, body, outer.into(), BooleanKind::Intersect)?;
    }

    body.into_solid()
        .ok_or(AssemblyError::EmptyPart { part: "box" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use box_layout::{plan_layout, LayoutConfig};
    use box_types::RenderMode;
    use csg_kernel::{MockCall, MockKernel};

    fn plan(params: &FormParameters) -> LayoutPlan {
        plan_layout(params, RenderMode::Preview, &LayoutConfig::default())
    }

    #[test]
    fn dividers_are_evenly_spaced() {
        let params = FormParameters {
            width: 33.0,
            depth: 20.0,
            wall_thickness: 1.5,
            sections_across: 3,
            sections_deep: 1,
            internal_wall_thickness: 1.0,
            ..FormParameters::default()
        };
        let dividers = divider_layout(&plan(&params), &params);
        assert_eq!(dividers.len(), 2);
        // Cavity 30 wide plus one wall: 31 / 3 spacing.
        let xs: Vec<f64> = dividers.iter().map(|d| d.center[0]).collect();
        assert!((xs[0] - (31.0 / 3.0 - 15.5)).abs() < 1e-9);
        assert!((xs[1] - (62.0 / 3.0 - 15.5)).abs() < 1e-9);
        assert!((xs[0] + xs[1]).abs() < 1e-9, "dividers are symmetric");
        assert_eq!(dividers[0].size, [1.0, 17.0 + 1.5, dividers[0].size[2]]);
    }

    #[test]
    fn divider_height_leaves_room_for_insert_lid() {
        let params = FormParameters {
            height: 30.0,
            wall_thickness: 2.0,
            lid_depth: 5.0,
            lid_tolerance: 0.2,
            sections_across: 2,
            internal_wall_height: 100.0,
            ..FormParameters::default()
        };
        let dividers = divider_layout(&plan(&params), &params);
        let expected = 30.0 - 2.0 - 5.0 - 0.2;
        assert!((dividers[0].size[2] - expected).abs() < 1e-9);
        assert!((dividers[0].center[2] - (expected / 2.0 + 2.0)).abs() < 1e-9);

        let cover = FormParameters {
            lid_type: LidType::Cover,
            ..params
        };
        let dividers = divider_layout(&plan(&cover), &cover);
        assert!((dividers[0].size[2] - 28.0).abs() < 1e-9);
    }

    #[test]
    fn requested_divider_height_wins_when_lower() {
        let params = FormParameters {
            sections_deep: 3,
            internal_wall_height: 4.0,
            ..FormParameters::default()
        };
        let dividers = divider_layout(&plan(&params), &params);
        assert_eq!(dividers.len(), 2);
        assert!(dividers.iter().all(|d| d.size[2] == 4.0));
        assert!(dividers.iter().all(|d| d.center[0] == 0.0));
    }

    #[test]
    fn box_is_hollow_with_a_floor() {
        let params = FormParameters {
            corner_radius: 0.0,
            ..FormParameters::default()
        };
        let plan = plan(&params);
        let mut kernel = MockKernel::new();
        let mut diagnostics = Diagnostics::default();
        let body = build_box(&mut kernel, &plan, &params, &AssemblyOptions::default(), &mut diagnostics)
            .unwrap();
        assert!(kernel.contains_point(&body, [0.0, 0.0, 0.5]).unwrap(), "floor");
        assert!(!kernel.contains_point(&body, [0.0, 0.0, 10.0]).unwrap(), "cavity");
        assert!(kernel.contains_point(&body, [19.5, 0.0, 10.0]).unwrap(), "wall");
        assert!(!diagnostics.is_degraded());
        assert_eq!(kernel.call_count(MockCall::Intersect), 0);
    }

    #[test]
    fn dividers_are_clipped_to_the_outline() {
        let params = FormParameters {
            sections_across: 2,
            ..FormParameters::default()
        };
        let plan = plan(&params);
        let mut kernel = MockKernel::new();
        let mut diagnostics = Diagnostics::default();
        let body = build_box(&mut kernel, &plan, &params, &AssemblyOptions::default(), &mut diagnostics)
            .unwrap();
        assert_eq!(kernel.call_count(MockCall::Intersect), 1);
        assert!(kernel.contains_point(&body, [0.0, 0.0, 5.0]).unwrap(), "divider");
        assert!(!kernel.contains_point(&body, [10.0, 0.0, 5.0]).unwrap(), "compartment");
    }

    #[test]
    fn solid_walls_give_a_block_with_a_warning() {
        let params = FormParameters {
            width: 10.0,
            depth: 10.0,
            wall_thickness: 5.0,
            dimension_type: box_types::DimensionType::Inner,
            sections_across: 2,
            ..FormParameters::default()
        };
        let mut plan = plan(&params);
        plan.parts.box_inner.size[0] = 0.0;
        let mut kernel = MockKernel::new();
        let mut diagnostics = Diagnostics::default();
        let body = build_box(&mut kernel, &plan, &params, &AssemblyOptions::default(), &mut diagnostics)
            .unwrap();
        assert!(kernel.contains_point(&body, [0.0, 0.0, 10.0]).unwrap());
        assert_eq!(kernel.call_count(MockCall::Subtract), 0);
        assert_eq!(diagnostics.warnings.len(), 2);
    }

    #[test]
    fn zero_walls_leave_no_box() {
        let params = FormParameters {
            wall_thickness: 0.0,
            dimension_type: box_types::DimensionType::Inner,
            ..FormParameters::default()
        };
        let plan = plan(&params);
        let mut kernel = MockKernel::new();
        let err = build_box(
            &mut kernel,
            &plan,
            &params,
            &AssemblyOptions::default(),
            &mut Diagnostics::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AssemblyError::EmptyPart { part: "box" }));
    }

    #[test]
    fn degenerate_outer_box_is_an_error() {
        let params = FormParameters {
            height: 0.0,
            ..FormParameters::default()
        };
        let plan = plan(&params);
        let mut kernel = MockKernel::new();
        let err = build_box(
            &mut kernel,
            &plan,
            &params,
            &AssemblyOptions::default(),
            &mut Diagnostics::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AssemblyError::EmptyPart { part: "box" }));
        assert!(kernel.calls().is_empty());
    }
}
