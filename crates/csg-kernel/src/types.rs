use serde::{Deserialize, Serialize};

pub use box_types::Rgba;

/// A point or vector in model space (millimetres).
pub type Vec3 = [f64; 3];

/// Opaque handle to a solid held by a kernel.
/// NEVER persisted. Valid only for the kernel instance that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolidHandle(pub(crate) u64);

impl SolidHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("degenerate operand for {operation}: {detail}")]
    DegenerateOperand { operation: String, detail: String },

    #[error("primitive construction failed: {reason}")]
    PrimitiveFailed { reason: String },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },

    #[error("solid not found: {id}")]
    SolidNotFound { id: u64 },

    #[error("kernel error: {message}")]
    Other { message: String },
}

impl KernelError {
    pub(crate) fn not_found(handle: &SolidHandle) -> Self {
        Self::SolidNotFound { id: handle.id() }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self {
            min: [
                center[0] - size[0] / 2.0,
                center[1] - size[1] / 2.0,
                center[2] - size[2] / 2.0,
            ],
            max: [
                center[0] + size[0] / 2.0,
                center[1] + size[1] / 2.0,
                center[2] + size[2] / 2.0,
            ],
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bb = Self {
            min: first,
            max: first,
        };
        for p in iter {
            for i in 0..3 {
                bb.min[i] = bb.min[i].min(p[i]);
                bb.max[i] = bb.max[i].max(p[i]);
            }
        }
        Some(bb)
    }

    pub fn size(&self) -> Vec3 {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    pub fn center(&self) -> Vec3 {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut bb = *self;
        for i in 0..3 {
            bb.min[i] = bb.min[i].min(other.min[i]);
            bb.max[i] = bb.max[i].max(other.max[i]);
        }
        bb
    }

    /// Overlap of two boxes; `None` when they are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let mut bb = *self;
        for i in 0..3 {
            bb.min[i] = bb.min[i].max(other.min[i]);
            bb.max[i] = bb.max[i].min(other.max[i]);
            if bb.min[i] > bb.max[i] {
                return None;
            }
        }
        Some(bb)
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: [
                self.min[0] + offset[0],
                self.min[1] + offset[1],
                self.min[2] + offset[2],
            ],
            max: [
                self.max[0] + offset[0],
                self.max[1] + offset[1],
                self.max[2] + offset[2],
            ],
        }
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            [a[0], a[1], a[2]],
            [b[0], a[1], a[2]],
            [b[0], b[1], a[2]],
            [a[0], b[1], a[2]],
            [a[0], a[1], b[2]],
            [b[0], a[1], b[2]],
            [b[0], b[1], b[2]],
            [a[0], b[1], b[2]],
        ]
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// Component-wise comparison within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (0..3).all(|i| {
            (self.min[i] - other.min[i]).abs() <= tol && (self.max[i] - other.max[i]).abs() <= tol
        })
    }
}

/// Rotate a point about the origin by Euler angles (radians).
///
/// Applied X first, then Y, then Z, i.e. `p' = Rz · Ry · Rx · p`.
pub fn rotate_point(angles: Vec3, p: Vec3) -> Vec3 {
    let p = rotate_axis(p, 0, angles[0]);
    let p = rotate_axis(p, 1, angles[1]);
    rotate_axis(p, 2, angles[2])
}

/// Inverse of [`rotate_point`].
pub fn unrotate_point(angles: Vec3, p: Vec3) -> Vec3 {
    let p = rotate_axis(p, 2, -angles[2]);
    let p = rotate_axis(p, 1, -angles[1]);
    rotate_axis(p, 0, -angles[0])
}

fn rotate_axis(p: Vec3, axis: usize, angle: f64) -> Vec3 {
    if angle == 0.0 {
        return p;
    }
    let (s, c) = angle.sin_cos();
    match axis {
        0 => [p[0], c * p[1] - s * p[2], s * p[1] + c * p[2]],
        1 => [c * p[0] + s * p[2], p[1], -s * p[0] + c * p[2]],
        _ => [c * p[0] - s * p[1], s * p[0] + c * p[1], p[2]],
    }
}
