//! Whole-pipeline regression scenarios against MockKernel.

use box_assembly::{AssemblyOptions, RoundingStrategy};
use box_pipeline::{PipelineConfig, ResolveOutcome};
use box_types::{DimensionType, FormParameters, LidType, RenderMode};
use csg_kernel::{MockCall, MockKernel};
use serde_json::json;
use test_harness::assertions::{assert_bounding_box, assert_left_of, assert_probe};
use test_harness::{helpers, BoxRun};

// ── Scenario 1: Small insert box, print layout ──────────────────────────

#[test]
fn test_small_insert_box_print_layout() {
    let run = BoxRun::mock(&helpers::small_insert_box(), RenderMode::Preview);
    run.assert_solid_count(2).unwrap();
    run.assert_colored().unwrap();

    let bb = run.all_bounds().unwrap();
    assert_bounding_box(&bb[0], [-28.0, -12.5, 0.0], [-3.0, 12.5, 25.0], 1e-9, "box").unwrap();
    assert!(bb[1].min[0] > 0.0, "lid on the positive side");
    assert_left_of(&bb[0], &bb[1], 1e-9, "print layout").unwrap();
}

// ── Scenario 2: Compartments ────────────────────────────────────────────

#[test]
fn test_three_compartments_across() {
    let run = BoxRun::mock(&helpers::three_across(), RenderMode::Preview);
    let cx = run.bounds(0).unwrap().center()[0];
    // Cavity 37 wide plus one divider thickness, split in three.
    for (x, expected) in [
        (38.0 / 3.0 - 19.0, true),
        (76.0 / 3.0 - 19.0, true),
        (-12.5, false),
        (0.0, false),
        (12.5, false),
    ] {
        let p = [cx + x, 0.0, 10.0];
        assert_probe(run.contains(0, p).unwrap(), expected, p, "dividers").unwrap();
    }
}

#[test]
fn test_compartment_grid_in_section_mode() {
    // Two 20 mm compartments each way, 1.5 mm walls, 1 mm dividers.
    let params = FormParameters {
        width: 20.0,
        depth: 20.0,
        sections_across: 2,
        sections_deep: 2,
        dimension_type: DimensionType::Section,
        ..FormParameters::default()
    };
    let run = BoxRun::mock(&params, RenderMode::Export);
    let bb = run.bounds(0).unwrap();
    let expected = 2.0 * 20.0 + 1.0 + 2.0 * 1.5;
    assert!((bb.size()[0] - expected).abs() < 1e-9);
    assert!((bb.size()[1] - expected).abs() < 1e-9);
    let c = bb.center();
    assert!(run.contains(0, [c[0], c[1] + 5.0, 5.0]).unwrap(), "divider across");
    assert!(run.contains(0, [c[0] + 5.0, c[1], 5.0]).unwrap(), "divider deep");
    assert!(!run.contains(0, [c[0] + 5.0, c[1] + 5.0, 5.0]).unwrap(), "compartment");
}

// ── Scenario 3: Corner radius limit ─────────────────────────────────────

#[test]
fn test_oversized_radius_keeps_footprint() {
    let run = BoxRun::mock(&helpers::oversized_radius(), RenderMode::Preview);
    let bb = run.bounds(0).unwrap();
    assert!((bb.size()[0] - 25.0).abs() < 1e-9);
    assert!((bb.size()[1] - 20.0).abs() < 1e-9);
    // Radius just under 10: the corner is rounded off, the edge midpoint is not.
    assert!(!run.contains(0, [bb.min[0] + 0.5, bb.min[1] + 0.5, 0.5]).unwrap());
    assert!(run.contains(0, [bb.min[0] + 0.5, bb.center()[1], 0.5]).unwrap());
}

// ── Scenario 4: Cross-section ───────────────────────────────────────────

#[test]
fn test_cross_section_quarters_both_parts() {
    let whole = BoxRun::mock(&FormParameters::default(), RenderMode::Preview);
    let cut = BoxRun::mock(&helpers::cross_section(), RenderMode::Preview);
    cut.assert_solid_count(2).unwrap();
    for i in 0..2 {
        let c = whole.bounds(i).unwrap().center();
        let removed = [c[0] + 5.0, c[1] - 5.0, 0.5];
        assert!(whole.contains(i, removed).unwrap());
        assert!(!cut.contains(i, removed).unwrap());
        for kept in [[c[0] - 5.0, c[1] - 5.0, 0.5], [c[0] + 5.0, c[1] + 5.0, 0.5]] {
            assert!(cut.contains(i, kept).unwrap());
        }
    }
}

#[test]
fn test_cross_section_ignored_on_export() {
    let run = BoxRun::mock(&helpers::cross_section(), RenderMode::Export);
    assert_eq!(run.kernel.call_count(MockCall::Colorize), 0);
    for i in 0..2 {
        let c = run.bounds(i).unwrap().center();
        assert!(run.contains(i, [c[0] + 5.0, c[1] - 5.0, 0.5]).unwrap());
    }
}

// ── Scenario 5: Lid variants assembled ──────────────────────────────────

#[test]
fn test_joined_cover_lid_seat() {
    let run = BoxRun::mock(&helpers::joined_cover(), RenderMode::Preview);
    let lid = run.bounds(1).unwrap();
    let body = run.bounds(0).unwrap();
    // Flipped: plate on top, seat pocket facing down into the box.
    assert!((lid.max[2] - (30.0 + 0.2 + 1.5)).abs() < 1e-9);
    assert!(lid.min[0] < body.min[0] && lid.max[0] > body.max[0]);
    assert!(!run.contains(1, [0.0, 0.0, 30.4]).unwrap(), "seat pocket");
    assert!(run.contains(1, [0.0, 0.0, 31.5]).unwrap(), "plate");
}

#[test]
fn test_joined_insert_lid_without_cutout() {
    let params = FormParameters {
        lid_cutout: false,
        is_print_mode: false,
        ..FormParameters::default()
    };
    let run = BoxRun::mock(&params, RenderMode::Preview);
    // Solid plug sitting inside the rim.
    assert!(run.contains(1, [0.0, 0.0, 28.0]).unwrap());
    assert!(!run.contains(0, [0.0, 0.0, 28.0]).unwrap());
}

#[test]
fn test_parameters_from_document() {
    let params = helpers::params_from_value(json!({
        "width": 60.0,
        "lidType": "COVER",
        "isPrintMode": false
    }))
    .unwrap();
    assert_eq!(params.lid_type, LidType::Cover);
    assert_eq!(params.depth, FormParameters::default().depth);
    let run = BoxRun::mock(&params, RenderMode::Export);
    run.assert_solid_count(2).unwrap();
    assert!((run.bounds(0).unwrap().size()[0] - 60.0).abs() < 1e-9);
}

// ── Strategies and failure handling ─────────────────────────────────────

#[test]
fn test_chopped_cylinder_strategy_matches_extruded() {
    let config = PipelineConfig {
        assembly: AssemblyOptions {
            strategy: RoundingStrategy::ChoppedCylinder,
            ..AssemblyOptions::default()
        },
        ..PipelineConfig::default()
    };
    let params = FormParameters::default();
    let chopped = BoxRun::new(MockKernel::new(), &params, RenderMode::Preview, &config);
    let extruded = BoxRun::mock(&params, RenderMode::Preview);
    assert_eq!(chopped.kernel.call_count(MockCall::ExtrudeRoundedRect), 0);
    for (a, b) in chopped.all_bounds().unwrap().iter().zip(&extruded.all_bounds().unwrap()) {
        assert!(a.approx_eq(b, 1e-9));
    }
}

#[test]
fn test_failing_kernel_falls_back() {
    let mut run = BoxRun::new(
        MockKernel::with_failing_booleans(),
        &FormParameters::default(),
        RenderMode::Preview,
        &PipelineConfig::default(),
    );
    run.assert_solid_count(1).unwrap();
    assert_bounding_box(&run.bounds(0).unwrap(), [-0.5; 3], [0.5; 3], 1e-9, "fallback").unwrap();
    let outcome = run.export(&PipelineConfig::default());
    assert!(matches!(outcome, ResolveOutcome::Failed { .. }));
}

#[test]
fn test_cramped_lid_exports_degraded() {
    let params = FormParameters {
        width: 10.0,
        depth: 10.0,
        wall_thickness: 2.0,
        lid_wall_thickness: 3.0,
        ..FormParameters::default()
    };
    let mut run = BoxRun::mock(&params, RenderMode::Export);
    run.assert_solid_count(2).unwrap();
    match run.export(&PipelineConfig::default()) {
        ResolveOutcome::Degraded { warnings, .. } => assert!(!warnings.is_empty()),
        other => panic!("expected degraded export, got {other:?}"),
    }
}
