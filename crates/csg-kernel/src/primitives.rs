//! Higher-level primitive builders on top of truck's sweep API.
//!
//! truck has no built-in box or cylinder; everything is successive sweeps.
//! All builders place the base at z = 0, centred on the Z axis unless noted.

use std::f64::consts::{FRAC_1_SQRT_2, PI};
use truck_modeling::builder;
use truck_modeling::topology::{Edge, Solid, Wire};
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

use crate::types::KernelError;

/// Create a box solid via successive translational sweeps.
/// Origin at (0,0,0), extends to (w,h,d).
pub fn make_box(w: f64, h: f64, d: f64) -> Solid {
    let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
    let edge = builder::tsweep(&v, Vector3::new(w, 0.0, 0.0));
    let face = builder::tsweep(&edge, Vector3::new(0.0, h, 0.0));
    builder::tsweep(&face, Vector3::new(0.0, 0.0, d))
}

/// Create a cylinder solid: circle wire → face → translational sweep.
pub fn make_cylinder(radius: f64, height: f64) -> Result<Solid, KernelError> {
    let v = builder::vertex(Point3::new(radius, 0.0, 0.0));
    let wire = builder::rsweep(&v, Point3::origin(), Vector3::unit_z(), Rad(2.0 * PI));
    let face = builder::try_attach_plane(&[wire]).map_err(|e| KernelError::PrimitiveFailed {
        reason: format!("circular face: {e}"),
    })?;
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}

/// Rounded rectangle profile (w × d, corner radius r) swept along +Z by `height`.
///
/// Requires `0 < r < min(w, d) / 2` so every straight side keeps a positive length.
pub fn make_rounded_prism(w: f64, d: f64, height: f64, r: f64) -> Result<Solid, KernelError> {
    if r <= 0.0 || r * 2.0 >= w.min(d) {
        return Err(KernelError::DegenerateOperand {
            operation: "rounded prism".to_string(),
            detail: format!("radius {r} does not fit {w} x {d}"),
        });
    }
    let (hx, hy) = (w / 2.0, d / 2.0);
    let p = |x: f64, y: f64| Point3::new(x, y, 0.0);

    // Tangent points, counter-clockwise from the bottom-right corner.
    let v = [
        builder::vertex(p(hx - r, -hy)),
        builder::vertex(p(hx, -hy + r)),
        builder::vertex(p(hx, hy - r)),
        builder::vertex(p(hx - r, hy)),
        builder::vertex(p(-hx + r, hy)),
        builder::vertex(p(-hx, hy - r)),
        builder::vertex(p(-hx, -hy + r)),
        builder::vertex(p(-hx + r, -hy)),
    ];
    // Arc midpoints: corner centre pushed diagonally outwards by r.
    let s = r * FRAC_1_SQRT_2;
    let mid = |cx: f64, cy: f64, sx: f64, sy: f64| p(cx + sx * s, cy + sy * s);

    let edges: Vec<Edge> = vec![
        builder::circle_arc(&v[0], &v[1], mid(hx - r, -hy + r, 1.0, -1.0)),
        builder::line(&v[1], &v[2]),
        builder::circle_arc(&v[2], &v[3], mid(hx - r, hy - r, 1.0, 1.0)),
        builder::line(&v[3], &v[4]),
        builder::circle_arc(&v[4], &v[5], mid(-hx + r, hy - r, -1.0, 1.0)),
        builder::line(&v[5], &v[6]),
        builder::circle_arc(&v[6], &v[7], mid(-hx + r, -hy + r, -1.0, -1.0)),
        builder::line(&v[7], &v[0]),
    ];
    let wire = Wire::from_iter(edges);
    let face = builder::try_attach_plane(&[wire]).map_err(|e| KernelError::PrimitiveFailed {
        reason: format!("rounded rectangle face: {e}"),
    })?;
    Ok(builder::tsweep(&face, Vector3::new(0.0, 0.0, height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex_bounds(solid: &Solid) -> ([f64; 3], [f64; 3]) {
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for shell in solid.boundaries() {
            for v in shell.vertex_iter() {
                let pt = v.point();
                for i in 0..3 {
                    min[i] = min[i].min(pt[i]);
                    max[i] = max[i].max(pt[i]);
                }
            }
        }
        (min, max)
    }

    #[test]
    fn test_make_box_topology() {
        let solid = make_box(1.0, 2.0, 3.0);

        let boundaries = solid.boundaries();
        assert_eq!(boundaries.len(), 1, "Box should have 1 shell");
        let faces: Vec<_> = boundaries[0].face_iter().collect();
        assert_eq!(faces.len(), 6, "Box should have 6 faces");
    }

    #[test]
    fn test_make_box_dimensions() {
        let (min, max) = vertex_bounds(&make_box(2.0, 3.0, 4.0));
        let eps = 1e-10;
        assert!((max[0] - min[0] - 2.0).abs() < eps, "Width should be 2");
        assert!((max[1] - min[1] - 3.0).abs() < eps, "Depth should be 3");
        assert!((max[2] - min[2] - 4.0).abs() < eps, "Height should be 4");
    }

    #[test]
    fn test_make_cylinder_has_caps_and_side() {
        let solid = make_cylinder(1.0, 2.0).unwrap();
        let faces: Vec<_> = solid.boundaries()[0].face_iter().collect();
        assert!(faces.len() >= 3, "Cylinder should have at least 3 faces");
    }

    #[test]
    fn test_rounded_prism_faces_and_extent() {
        let solid = make_rounded_prism(10.0, 6.0, 2.0, 1.5).unwrap();
        let faces: Vec<_> = solid.boundaries()[0].face_iter().collect();
        // 8 side faces (4 flat, 4 rounded) plus top and bottom.
        assert_eq!(faces.len(), 10);

        // Tangent points sit on the extreme sides, so vertex bounds are exact.
        let (min, max) = vertex_bounds(&solid);
        assert!((max[0] - min[0] - 10.0).abs() < 1e-9);
        assert!((max[1] - min[1] - 6.0).abs() < 1e-9);
        assert!((max[2] - min[2] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_prism_rejects_oversized_radius() {
        assert!(matches!(
            make_rounded_prism(4.0, 4.0, 1.0, 2.0),
            Err(KernelError::DegenerateOperand { .. })
        ));
        assert!(make_rounded_prism(4.0, 4.0, 1.0, 0.0).is_err());
    }
}
