//! MockKernel: deterministic test double implementing Kernel + KernelIntrospect.
//!
//! Solids are kept as CSG expression trees over exact primitives, so tests can
//! ask point-membership and sampled-volume questions without a B-rep engine.
//! Curves are treated as exact; the `segments` argument is recorded but unused.

use crate::traits::{Kernel, KernelIntrospect};
use crate::types::*;
use std::collections::HashMap;

/// Samples per axis when probing a plane for emptiness during scission.
const PLANE_SAMPLES: usize = 33;
/// Samples per axis when checking whether a scission piece holds material.
const PIECE_SAMPLES: usize = 9;

/// Kernel calls recorded by the mock, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockCall {
    Cuboid,
    Cylinder,
    ExtrudeRoundedRect,
    Union,
    Subtract,
    Intersect,
    Translate,
    Rotate,
    Scission,
    Colorize,
}

#[derive(Debug, Clone)]
enum Shape {
    Cuboid { center: Vec3, size: Vec3 },
    Cylinder { center: Vec3, radius: f64, height: f64 },
    RoundedPrism { center: Vec3, size: Vec3, radius: f64 },
    Union(Box<Shape>, Box<Shape>),
    Subtract(Box<Shape>, Box<Shape>),
    Intersect(Box<Shape>, Box<Shape>),
    Translate(Box<Shape>, Vec3),
    Rotate(Box<Shape>, Vec3),
}

impl Shape {
    fn contains(&self, p: Vec3) -> bool {
        match self {
            Shape::Cuboid { center, size } => {
                BoundingBox::from_center_size(*center, *size).contains_point(p)
            }
            Shape::Cylinder {
                center,
                radius,
                height,
            } => {
                let (dx, dy, dz) = (p[0] - center[0], p[1] - center[1], p[2] - center[2]);
                dz.abs() <= height / 2.0 && dx * dx + dy * dy <= radius * radius
            }
            Shape::RoundedPrism {
                center,
                size,
                radius,
            } => {
                if !BoundingBox::from_center_size(*center, *size).contains_point(p) {
                    return false;
                }
                // Distance past the straight part of each side; positive in a corner zone.
                let cx = (p[0] - center[0]).abs() - (size[0] / 2.0 - radius);
                let cy = (p[1] - center[1]).abs() - (size[1] / 2.0 - radius);
                if cx > 0.0 && cy > 0.0 {
                    cx * cx + cy * cy <= radius * radius
                } else {
                    true
                }
            }
            Shape::Union(a, b) => a.contains(p) || b.contains(p),
            Shape::Subtract(a, b) => a.contains(p) && !b.contains(p),
            Shape::Intersect(a, b) => a.contains(p) && b.contains(p),
            Shape::Translate(inner, offset) => {
                inner.contains([p[0] - offset[0], p[1] - offset[1], p[2] - offset[2]])
            }
            Shape::Rotate(inner, angles) => inner.contains(unrotate_point(*angles, p)),
        }
    }

    /// The region this shape fills when it is exactly an axis-aligned box.
    fn solid_box(&self) -> Option<BoundingBox> {
        match self {
            Shape::Cuboid { center, size } => Some(BoundingBox::from_center_size(*center, *size)),
            Shape::Translate(inner, offset) => Some(inner.solid_box()?.translated(*offset)),
            _ => None,
        }
    }

    /// Conservative bounds; `None` when the shape is provably empty.
    fn bounds(&self) -> Option<BoundingBox> {
        match self {
            Shape::Cuboid { center, size } | Shape::RoundedPrism { center, size, .. } => {
                Some(BoundingBox::from_center_size(*center, *size))
            }
            Shape::Cylinder {
                center,
                radius,
                height,
            } => Some(BoundingBox::from_center_size(
                *center,
                [radius * 2.0, radius * 2.0, *height],
            )),
            Shape::Union(a, b) => match (a.bounds(), b.bounds()) {
                (Some(x), Some(y)) => Some(x.union(&y)),
                (x, y) => x.or(y),
            },
            Shape::Intersect(a, b) => a.bounds()?.intersection(&b.bounds()?),
            Shape::Subtract(a, b) => {
                let kept = a.bounds()?;
                match b.solid_box() {
                    Some(cut) => trim_bounds(kept, cut),
                    None => Some(kept),
                }
            }
            Shape::Translate(inner, offset) => Some(inner.bounds()?.translated(*offset)),
            Shape::Rotate(inner, angles) => {
                let bb = inner.bounds()?;
                BoundingBox::from_points(bb.corners().iter().map(|c| rotate_point(*angles, *c)))
            }
        }
    }
}

/// Shrink `kept` where `cut` spans it completely on the two other axes.
fn trim_bounds(mut kept: BoundingBox, cut: BoundingBox) -> Option<BoundingBox> {
    for axis in 0..3 {
        let spans_others = (0..3)
            .filter(|&i| i != axis)
            .all(|i| cut.min[i] <= kept.min[i] && cut.max[i] >= kept.max[i]);
        if !spans_others {
            continue;
        }
        let covers_low = cut.min[axis] <= kept.min[axis] && cut.max[axis] > kept.min[axis];
        let covers_high = cut.max[axis] >= kept.max[axis] && cut.min[axis] < kept.max[axis];
        match (covers_low, covers_high) {
            (true, true) => return None,
            (true, false) => kept.min[axis] = cut.max[axis],
            (false, true) => kept.max[axis] = cut.min[axis],
            (false, false) => {}
        }
    }
    Some(kept)
}

/// Evenly spaced sample coordinates inside `[lo, hi]` (cell centres).
fn samples(lo: f64, hi: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (hi - lo) / n as f64;
    (0..n).map(move |i| lo + step * (i as f64 + 0.5))
}

#[derive(Debug, Clone)]
struct MockSolid {
    shape: Shape,
    color: Option<Rgba>,
}

/// Deterministic test double for the CSG kernel.
/// Implements both Kernel and KernelIntrospect.
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    calls: Vec<MockCall>,
    fail_booleans: bool,
    split_solids: bool,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            calls: Vec::new(),
            fail_booleans: false,
            split_solids: true,
        }
    }

    /// A kernel whose boolean operations always fail, for exercising
    /// callers' failure handling.
    pub fn with_failing_booleans() -> Self {
        Self {
            fail_booleans: true,
            ..Self::new()
        }
    }

    /// A kernel whose scission always returns the input as one piece.
    pub fn without_scission() -> Self {
        Self {
            split_solids: false,
            ..Self::new()
        }
    }

    /// Every kernel call made so far, in order.
    pub fn calls(&self) -> &[MockCall] {
        &self.calls
    }

    pub fn call_count(&self, kind: MockCall) -> usize {
        self.calls.iter().filter(|&&c| c == kind).count()
    }

    /// Whether `point` lies inside the solid (boundary inclusive).
    pub fn contains_point(&self, solid: &SolidHandle, point: Vec3) -> Result<bool, KernelError> {
        Ok(self.get(solid)?.shape.contains(point))
    }

    /// Volume estimated by sampling an `n`³ grid over the solid's bounds.
    pub fn sample_volume(&self, solid: &SolidHandle, n: usize) -> Result<f64, KernelError> {
        let shape = &self.get(solid)?.shape;
        let Some(bb) = shape.bounds() else {
            return Ok(0.0);
        };
        let size = bb.size();
        let mut inside = 0usize;
        for x in samples(bb.min[0], bb.max[0], n) {
            for y in samples(bb.min[1], bb.max[1], n) {
                for z in samples(bb.min[2], bb.max[2], n) {
                    if shape.contains([x, y, z]) {
                        inside += 1;
                    }
                }
            }
        }
        let cell = size[0] * size[1] * size[2] / (n * n * n) as f64;
        Ok(inside as f64 * cell)
    }

    fn alloc_handle(&mut self) -> SolidHandle {
        let h = SolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn store(&mut self, shape: Shape) -> SolidHandle {
        let handle = self.alloc_handle();
        self.solids
            .insert(handle.id(), MockSolid { shape, color: None });
        handle
    }

    fn get(&self, handle: &SolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or_else(|| KernelError::not_found(handle))
    }

    fn shape(&self, handle: &SolidHandle) -> Result<Shape, KernelError> {
        Ok(self.get(handle)?.shape.clone())
    }

    fn check_boolean(&self, operation: &str) -> Result<(), KernelError> {
        if self.fail_booleans {
            return Err(KernelError::BooleanFailed {
                reason: format!("mock configured to fail {operation}"),
            });
        }
        Ok(())
    }

    fn is_void_plane(shape: &Shape, bb: &BoundingBox, axis: usize, at: f64) -> bool {
        let (u, v) = match axis {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        samples(bb.min[u], bb.max[u], PLANE_SAMPLES).all(|a| {
            samples(bb.min[v], bb.max[v], PLANE_SAMPLES).all(|b| {
                let mut p = [0.0; 3];
                p[axis] = at;
                p[u] = a;
                p[v] = b;
                !shape.contains(p)
            })
        })
    }

    fn has_material(shape: &Shape, region: &BoundingBox) -> bool {
        samples(region.min[0], region.max[0], PIECE_SAMPLES).any(|x| {
            samples(region.min[1], region.max[1], PIECE_SAMPLES).any(|y| {
                samples(region.min[2], region.max[2], PIECE_SAMPLES)
                    .any(|z| shape.contains([x, y, z]))
            })
        })
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

fn require_positive(operation: &str, size: Vec3) -> Result<(), KernelError> {
    if size.iter().all(|&s| s > 0.0 && s.is_finite()) {
        Ok(())
    } else {
        Err(KernelError::DegenerateOperand {
            operation: operation.to_string(),
            detail: format!("size {size:?}"),
        })
    }
}

impl Kernel for MockKernel {
    fn cuboid(&mut self, size: Vec3, center: Vec3) -> Result<SolidHandle, KernelError> {
        self.calls.push(MockCall::Cuboid);
        require_positive("cuboid", size)?;
        Ok(self.store(Shape::Cuboid { center, size }))
    }

    fn cylinder(
        &mut self,
        radius: f64,
        height: f64,
        center: Vec3,
        _segments: u32,
    ) -> Result<SolidHandle, KernelError> {
        self.calls.push(MockCall::Cylinder);
        require_positive("cylinder", [radius, radius, height])?;
        Ok(self.store(Shape::Cylinder {
            center,
            radius,
            height,
        }))
    }

    fn extrude_rounded_rect(
        &mut self,
        size: Vec3,
        center: Vec3,
        radius: f64,
        _segments: u32,
    ) -> Result<SolidHandle, KernelError> {
        self.calls.push(MockCall::ExtrudeRoundedRect);
        require_positive("extrude_rounded_rect", size)?;
        if radius < 0.0 || radius * 2.0 > size[0].min(size[1]) {
            return Err(KernelError::DegenerateOperand {
                operation: "extrude_rounded_rect".to_string(),
                detail: format!("radius {radius} does not fit size {size:?}"),
            });
        }
        Ok(self.store(Shape::RoundedPrism {
            center,
            size,
            radius,
        }))
    }

    fn boolean_union(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError> {
        self.calls.push(MockCall::Union);
        self.check_boolean("union")?;
        let shape = Shape::Union(Box::new(self.shape(a)?), Box::new(self.shape(b)?));
        Ok(self.store(shape))
    }

    fn boolean_subtract(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError> {
        self.calls.push(MockCall::Subtract);
        self.check_boolean("subtract")?;
        let shape = Shape::Subtract(Box::new(self.shape(a)?), Box::new(self.shape(b)?));
        Ok(self.store(shape))
    }

    fn boolean_intersect(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError> {
        self.calls.push(MockCall::Intersect);
        self.check_boolean("intersect")?;
        let shape = Shape::Intersect(Box::new(self.shape(a)?), Box::new(self.shape(b)?));
        Ok(self.store(shape))
    }

    fn translate(&mut self, solid: &SolidHandle, offset: Vec3) -> Result<SolidHandle, KernelError> {
        self.calls.push(MockCall::Translate);
        let shape = Shape::Translate(Box::new(self.shape(solid)?), offset);
        Ok(self.store(shape))
    }

    fn rotate(&mut self, solid: &SolidHandle, angles: Vec3) -> Result<SolidHandle, KernelError> {
        self.calls.push(MockCall::Rotate);
        let shape = Shape::Rotate(Box::new(self.shape(solid)?), angles);
        Ok(self.store(shape))
    }

    /// Only recognises pieces separated along the bounding-box centre planes
    /// (X and Y), which is how a cross-cut cylinder falls apart.
    fn scission(&mut self, solid: &SolidHandle) -> Result<Vec<SolidHandle>, KernelError> {
        self.calls.push(MockCall::Scission);
        let shape = self.shape(solid)?;
        if !self.split_solids {
            return Ok(vec![self.store(shape)]);
        }
        let Some(bb) = shape.bounds() else {
            return Ok(Vec::new());
        };
        let c = bb.center();

        let halves = |axis: usize, split: bool| -> Vec<(f64, f64)> {
            if split {
                vec![(bb.min[axis], c[axis]), (c[axis], bb.max[axis])]
            } else {
                vec![(bb.min[axis], bb.max[axis])]
            }
        };
        let xs = halves(0, Self::is_void_plane(&shape, &bb, 0, c[0]));
        let ys = halves(1, Self::is_void_plane(&shape, &bb, 1, c[1]));
        if xs.len() == 1 && ys.len() == 1 {
            return Ok(vec![self.store(shape)]);
        }

        let mut pieces = Vec::new();
        for &(x0, x1) in &xs {
            for &(y0, y1) in &ys {
                let region = BoundingBox {
                    min: [x0, y0, bb.min[2]],
                    max: [x1, y1, bb.max[2]],
                };
                if !Self::has_material(&shape, &region) {
                    continue;
                }
                let clip = Shape::Cuboid {
                    center: region.center(),
                    size: region.size(),
                };
                pieces.push(self.store(Shape::Intersect(
                    Box::new(shape.clone()),
                    Box::new(clip),
                )));
            }
        }
        Ok(pieces)
    }

    fn colorize(&mut self, solid: &SolidHandle, color: Rgba) -> Result<SolidHandle, KernelError> {
        self.calls.push(MockCall::Colorize);
        let shape = self.shape(solid)?;
        let handle = self.alloc_handle();
        self.solids.insert(
            handle.id(),
            MockSolid {
                shape,
                color: Some(color),
            },
        );
        Ok(handle)
    }
}

impl KernelIntrospect for MockKernel {
    fn bounding_box(&self, solid: &SolidHandle) -> Result<BoundingBox, KernelError> {
        self.get(solid)?
            .shape
            .bounds()
            .ok_or_else(|| KernelError::Other {
                message: "solid is empty".to_string(),
            })
    }

    fn color(&self, solid: &SolidHandle) -> Option<Rgba> {
        self.solids.get(&solid.id()).and_then(|s| s.color)
    }
}
