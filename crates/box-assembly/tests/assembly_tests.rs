use box_assembly::{assemble, AssembledParts, AssemblyOptions, RoundingStrategy};
use box_layout::{plan_layout, LayoutConfig, LayoutPlan};
use box_types::{FormParameters, LidType, RenderMode};
use csg_kernel::{BoundingBox, KernelIntrospect, MockCall, MockKernel};

/// Helper: plan and assemble with the mock kernel.
fn run(params: &FormParameters, mode: RenderMode) -> (MockKernel, LayoutPlan, AssembledParts) {
    run_with(params, mode, &AssemblyOptions::default())
}

fn run_with(
    params: &FormParameters,
    mode: RenderMode,
    options: &AssemblyOptions,
) -> (MockKernel, LayoutPlan, AssembledParts) {
    let plan = plan_layout(params, mode, &LayoutConfig::default());
    let mut kernel = MockKernel::new();
    let parts = assemble(&mut kernel, &plan, params, options).unwrap();
    (kernel, plan, parts)
}

fn bounds(kernel: &MockKernel, parts: &AssembledParts) -> (BoundingBox, BoundingBox) {
    (
        kernel.bounding_box(&parts.box_solid).unwrap(),
        kernel.bounding_box(&parts.lid_solid).unwrap(),
    )
}

// ── Layout ─────────────────────────────────────────────────────────────────

#[test]
fn print_layout_separates_box_and_lid() {
    let params = FormParameters::default();
    let (kernel, _, parts) = run(&params, RenderMode::Preview);
    let (box_bb, lid_bb) = bounds(&kernel, &parts);

    assert!((box_bb.min[0] + 43.0).abs() < 1e-9);
    assert!((box_bb.max[0] + 3.0).abs() < 1e-9);
    assert!((lid_bb.min[0] - 3.0).abs() < 1e-9);
    assert!((lid_bb.max[0] - 43.0).abs() < 1e-9);
    // Both rest on the bed.
    assert!(box_bb.min[2].abs() < 1e-9);
    assert!(lid_bb.min[2].abs() < 1e-9);
    assert_eq!(parts.solids().len(), 2);
}

#[test]
fn joined_layout_seats_insert_lid_in_the_box() {
    let params = FormParameters {
        is_print_mode: false,
        ..FormParameters::default()
    };
    let (kernel, _, parts) = run(&params, RenderMode::Preview);
    let (box_bb, lid_bb) = bounds(&kernel, &parts);

    assert!((box_bb.max[2] - 30.0).abs() < 1e-9);
    assert!((lid_bb.max[2] - 31.7).abs() < 1e-9);
    assert!((lid_bb.min[2] - (30.2 - 5.0)).abs() < 1e-9);
    // Plate rests on top of the walls; ring sits inside the cavity.
    assert!(kernel.contains_point(&parts.lid_solid, [0.0, 0.0, 31.0]).unwrap());
    assert!(kernel.contains_point(&parts.lid_solid, [17.5, 0.0, 27.0]).unwrap());
    assert!(!kernel.contains_point(&parts.box_solid, [17.5, 0.0, 27.0]).unwrap());
}

#[test]
fn joined_layout_wraps_cover_lid_around_the_box() {
    let params = FormParameters {
        is_print_mode: false,
        lid_type: LidType::Cover,
        ..FormParameters::default()
    };
    let (kernel, _, parts) = run(&params, RenderMode::Preview);
    let (box_bb, lid_bb) = bounds(&kernel, &parts);

    assert!(lid_bb.min[0] < box_bb.min[0]);
    assert!(lid_bb.max[0] > box_bb.max[0]);
    assert!((lid_bb.min[2] - (30.2 - 5.0)).abs() < 1e-9);
    // Skirt outside the box wall, box wall inside the skirt.
    assert!(kernel.contains_point(&parts.lid_solid, [21.0, 0.0, 28.0]).unwrap());
    assert!(!kernel.contains_point(&parts.lid_solid, [19.5, 0.0, 28.0]).unwrap());
    assert!(kernel.contains_point(&parts.box_solid, [19.5, 0.0, 28.0]).unwrap());
}

// ── Parts ──────────────────────────────────────────────────────────────────

#[test]
fn three_sections_across_give_two_dividers() {
    let params = FormParameters {
        corner_radius: 5.0,
        sections_across: 3,
        sections_deep: 1,
        internal_wall_thickness: 1.0,
        ..FormParameters::default()
    };
    let (kernel, plan, parts) = run(&params, RenderMode::Preview);
    // Every rounded part is extruded; only dividers are plain cuboids.
    assert_eq!(kernel.call_count(MockCall::Cuboid), 2);

    let total = plan.parts.box_inner.size[0] + 1.0;
    let cx = kernel.bounding_box(&parts.box_solid).unwrap().center()[0];
    for i in 1..3 {
        let x = cx + total / 3.0 * f64::from(i) - total / 2.0;
        assert!(kernel.contains_point(&parts.box_solid, [x, 0.0, 10.0]).unwrap());
    }
    assert!(!kernel.contains_point(&parts.box_solid, [cx, 0.0, 10.0]).unwrap());
}

#[test]
fn lid_without_cutout_has_no_hollow() {
    let params = FormParameters {
        lid_cutout: false,
        ..FormParameters::default()
    };
    let (kernel, plan, parts) = run(&params, RenderMode::Export);
    let tx = plan.placements.lid.translation[0];
    let wall = plan.parts.get(box_types::PartId::InsertLidWallOuter).unwrap();
    let half = wall.size[0] / 2.0 - wall.corner_radius;
    for i in 0..=10 {
        for j in 0..=10 {
            let x = tx - half + 2.0 * half * f64::from(i) / 10.0;
            let y = -half + 2.0 * half * f64::from(j) / 10.0;
            assert!(
                kernel.contains_point(&parts.lid_solid, [x, y, 4.0]).unwrap(),
                "hollow at ({x}, {y})"
            );
        }
    }
}

#[test]
fn segments_are_recorded() {
    let params = FormParameters::default();
    let (_, plan, parts) = run(&params, RenderMode::Export);
    assert_eq!(parts.diagnostics.segments, plan.segments);
    assert!(!parts.diagnostics.is_degraded());
}

#[test]
fn chopped_cylinder_strategy_builds_the_same_outline() {
    let params = FormParameters::default();
    let options = AssemblyOptions {
        strategy: RoundingStrategy::ChoppedCylinder,
        ..AssemblyOptions::default()
    };
    let (kernel_a, _, extruded) = run(&params, RenderMode::Preview);
    let (kernel_b, _, chopped) = run_with(&params, RenderMode::Preview, &options);
    assert_eq!(kernel_b.call_count(MockCall::ExtrudeRoundedRect), 0);

    let (box_a, lid_a) = bounds(&kernel_a, &extruded);
    let (box_b, lid_b) = bounds(&kernel_b, &chopped);
    assert!(box_a.approx_eq(&box_b, 1e-9));
    assert!(lid_a.approx_eq(&lid_b, 1e-9));
    let corner = [box_a.min[0] + 0.2, box_a.min[1] + 0.2, 10.0];
    assert!(!kernel_b.contains_point(&chopped.box_solid, corner).unwrap());
}

// ── Cross-section ──────────────────────────────────────────────────────────

#[test]
fn cross_section_cuts_a_quadrant_from_each_part() {
    let params = FormParameters {
        is_cross_section_mode: true,
        ..FormParameters::default()
    };
    let (kernel, plan, parts) = run(&params, RenderMode::Preview);
    for (solid, placement) in [
        (&parts.box_solid, plan.placements.box_part),
        (&parts.lid_solid, plan.placements.lid),
    ] {
        let [cx, cy, _] = placement.translation;
        // Plate/floor material in each quadrant.
        let probe = |dx: f64, dy: f64| [cx + dx, cy + dy, 0.5];
        assert!(!kernel.contains_point(solid, probe(5.0, -5.0)).unwrap());
        assert!(kernel.contains_point(solid, probe(-5.0, -5.0)).unwrap());
        assert!(kernel.contains_point(solid, probe(5.0, 5.0)).unwrap());
        assert!(kernel.contains_point(solid, probe(-5.0, 5.0)).unwrap());
    }
}

#[test]
fn export_ignores_cross_section() {
    let params = FormParameters {
        is_cross_section_mode: true,
        ..FormParameters::default()
    };
    let (kernel, plan, parts) = run(&params, RenderMode::Export);
    let [cx, cy, _] = plan.placements.box_part.translation;
    assert!(kernel
        .contains_point(&parts.box_solid, [cx + 5.0, cy - 5.0, 0.5])
        .unwrap());
}

#[test]
fn degenerate_box_is_reported() {
    let params = FormParameters {
        width: -4.0,
        ..FormParameters::default()
    };
    let plan = plan_layout(&params, RenderMode::Preview, &LayoutConfig::default());
    let mut kernel = MockKernel::new();
    let err = assemble(&mut kernel, &plan, &params, &AssemblyOptions::default()).unwrap_err();
    assert!(matches!(err, box_assembly::AssemblyError::EmptyPart { .. }));
}
