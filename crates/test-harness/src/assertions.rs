//! Assertion helpers with diagnostic output.
//!
//! Each failure names the context it was checked in and shows expected vs
//! actual values.

use csg_kernel::{BoundingBox, SolidHandle, Vec3};

use crate::helpers::HarnessError;

pub fn assert_solid_count(
    solids: &[SolidHandle],
    expected: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    if solids.len() == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected {} solids, got {}", ctx, expected, solids.len()),
        })
    }
}

/// Assert a bounding box matches expected corners within tolerance.
pub fn assert_bounding_box(
    actual: &BoundingBox,
    expected_min: Vec3,
    expected_max: Vec3,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    for i in 0..3 {
        if (actual.min[i] - expected_min[i]).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] bounding box min[{}]: expected {:.3}, got {:.3} (tol={})",
                    ctx, i, expected_min[i], actual.min[i], tol,
                ),
            });
        }
        if (actual.max[i] - expected_max[i]).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] bounding box max[{}]: expected {:.3}, got {:.3} (tol={})",
                    ctx, i, expected_max[i], actual.max[i], tol,
                ),
            });
        }
    }
    Ok(())
}

/// Assert `a` lies entirely at lower X than `b`, allowing `tol` overlap.
pub fn assert_left_of(
    a: &BoundingBox,
    b: &BoundingBox,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    if a.max[0] <= b.min[0] + tol {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected max x {:.3} <= min x {:.3}",
                ctx, a.max[0], b.min[0]
            ),
        })
    }
}

/// Assert every coordinate of a bounding box is finite.
pub fn assert_finite(bb: &BoundingBox, ctx: &str) -> Result<(), HarnessError> {
    if bb.min.iter().chain(&bb.max).all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] non-finite bounds {:?}", ctx, bb),
        })
    }
}

/// Assert that a membership probe came out as expected.
pub fn assert_probe(
    inside: bool,
    expected: bool,
    point: Vec3,
    ctx: &str,
) -> Result<(), HarnessError> {
    if inside == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] point {:?}: expected {}, got {}",
                ctx,
                point,
                if expected { "material" } else { "empty" },
                if inside { "material" } else { "empty" },
            ),
        })
    }
}
