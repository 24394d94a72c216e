//! Helper functions: error type, parameter presets, proptest strategies.

use box_types::{DimensionType, FormParameters, LidType};
use proptest::prelude::*;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("no solid at index {index} ({count} returned)")]
    NoSolid { index: usize, count: usize },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("kernel error: {0}")]
    Kernel(#[from] csg_kernel::KernelError),

    #[error("bad parameter document: {0}")]
    Params(#[from] serde_json::Error),
}

// ── Parameter Presets ───────────────────────────────────────────────────────

/// 25 mm cube, sharp corners, insert lid, print layout.
pub fn small_insert_box() -> FormParameters {
    FormParameters {
        width: 25.0,
        depth: 25.0,
        height: 25.0,
        wall_thickness: 1.5,
        corner_radius: 0.0,
        lid_type: LidType::Insert,
        lid_cutout: true,
        is_print_mode: true,
        ..FormParameters::default()
    }
}

/// Default box split into three compartments across.
pub fn three_across() -> FormParameters {
    FormParameters {
        sections_across: 3,
        sections_deep: 1,
        internal_wall_thickness: 1.0,
        ..FormParameters::default()
    }
}

/// Corner radius far larger than the footprint allows.
pub fn oversized_radius() -> FormParameters {
    FormParameters {
        width: 25.0,
        depth: 20.0,
        corner_radius: 50.0,
        ..FormParameters::default()
    }
}

/// Default box with the preview cross-section enabled.
pub fn cross_section() -> FormParameters {
    FormParameters {
        is_cross_section_mode: true,
        ..FormParameters::default()
    }
}

/// Cover lid with a seat, assembled on the box.
pub fn joined_cover() -> FormParameters {
    FormParameters {
        lid_type: LidType::Cover,
        lid_inner_depth: 0.5,
        is_print_mode: false,
        ..FormParameters::default()
    }
}

/// Parse a (possibly partial) camelCase parameter document; missing fields
/// take their defaults.
pub fn params_from_value(value: serde_json::Value) -> Result<FormParameters, HarnessError> {
    Ok(serde_json::from_value(value)?)
}

// ── Strategies ──────────────────────────────────────────────────────────────

pub fn arb_dimension_type() -> impl Strategy<Value = DimensionType> {
    prop_oneof![
        Just(DimensionType::Section),
        Just(DimensionType::Inner),
        Just(DimensionType::Outer),
    ]
}

pub fn arb_lid_type() -> impl Strategy<Value = LidType> {
    prop_oneof![Just(LidType::Insert), Just(LidType::Cover)]
}

/// Parameters within the form's declared bounds, including the awkward
/// corners: zero radius, walls thicker than the box, zero sections.
/// Walls start at the form's 0.1 minimum.
pub fn arb_params() -> impl Strategy<Value = FormParameters> {
    (
        (1.0f64..120.0, 1.0f64..120.0, 1.0f64..80.0),
        (0.0f64..40.0, 0.1f64..15.0),
        (0u32..5, 0u32..5, 0.0f64..3.0, 0.0f64..80.0),
        (0.5f64..5.0, 0.5f64..5.0, 0.0f64..10.0, 0.0f64..3.0, 0.0f64..2.0),
        (0.0f64..1.0, 0.0f64..10.0),
        (any::<bool>(), any::<bool>(), any::<bool>()),
        (arb_dimension_type(), arb_lid_type()),
    )
        .prop_map(
            |(
                (width, depth, height),
                (corner_radius, wall_thickness),
                (sections_across, sections_deep, internal_wall_thickness, internal_wall_height),
                (lid_thickness, lid_wall_thickness, lid_depth, lid_overhang, lid_inner_depth),
                (lid_tolerance, spacing),
                (lid_cutout, is_print_mode, is_cross_section_mode),
                (dimension_type, lid_type),
            )| FormParameters {
                width,
                depth,
                height,
                corner_radius,
                wall_thickness,
                sections_across,
                sections_deep,
                internal_wall_thickness,
                internal_wall_height,
                lid_thickness,
                lid_wall_thickness,
                lid_depth,
                lid_overhang,
                lid_inner_depth,
                lid_tolerance,
                lid_cutout,
                spacing,
                is_print_mode,
                is_cross_section_mode,
                dimension_type,
                lid_type,
            },
        )
}
