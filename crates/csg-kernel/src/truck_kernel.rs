//! TruckKernel: real geometry kernel wrapping truck's API.

use crate::primitives;
use crate::tessellation;
use crate::traits::{Kernel, KernelIntrospect};
use crate::types::*;
use std::collections::HashMap;

use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

/// Tolerance handed to truck's boolean operators.
const BOOLEAN_TOLERANCE: f64 = 0.05;
/// Chord tolerance used when triangulating for bounds.
const MESH_TOLERANCE: f64 = 0.01;

/// Real geometry kernel backed by the truck BREP library.
///
/// Curves are exact NURBS, so the `segments` arguments are ignored.
pub struct TruckKernel {
    next_handle: u64,
    solids: HashMap<u64, Solid>,
    colors: HashMap<u64, Rgba>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            colors: HashMap::new(),
        }
    }

    fn alloc_handle(&mut self) -> SolidHandle {
        let h = SolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    pub(crate) fn store_solid(&mut self, solid: Solid) -> SolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    pub(crate) fn get_solid(&self, handle: &SolidHandle) -> Result<&Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or_else(|| KernelError::not_found(handle))
    }

    /// Move a solid built with its base at z = 0 so its centre lands on `center`.
    fn place(&mut self, solid: Solid, height: f64, center: Vec3) -> SolidHandle {
        let moved = builder::translated(
            &solid,
            Vector3::new(center[0], center[1], center[2] - height / 2.0),
        );
        self.store_solid(moved)
    }
}

impl Default for TruckKernel {
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

impl Kernel for TruckKernel {
    fn cuboid(&mut self, size: Vec3, center: Vec3) -> Result<SolidHandle, KernelError> {
        require_positive("cuboid", size)?;
        let solid = primitives::make_box(size[0], size[1], size[2]);
        let corner = Vector3::new(
            center[0] - size[0] / 2.0,
            center[1] - size[1] / 2.0,
            center[2] - size[2] / 2.0,
        );
        Ok(self.store_solid(builder::translated(&solid, corner)))
    }

    fn cylinder(
        &mut self,
        radius: f64,
        height: f64,
        center: Vec3,
        _segments: u32,
    ) -> Result<SolidHandle, KernelError> {
        require_positive("cylinder", [radius, radius, height])?;
        let solid = primitives::make_cylinder(radius, height)?;
        Ok(self.place(solid, height, center))
    }

    fn extrude_rounded_rect(
        &mut self,
        size: Vec3,
        center: Vec3,
        radius: f64,
        segments: u32,
    ) -> Result<SolidHandle, KernelError> {
        require_positive("extrude_rounded_rect", size)?;
        if radius <= 0.0 {
            return self.cuboid(size, center);
        }
        tracing::trace!(?size, radius, segments, "extruding rounded rectangle");
        let solid = primitives::make_rounded_prism(size[0], size[1], size[2], radius)?;
        Ok(self.place(solid, size[2], center))
    }

    fn boolean_union(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?;
        let solid_b = self.get_solid(b)?;

        let result = truck_shapeops::or(solid_a, solid_b, BOOLEAN_TOLERANCE).ok_or_else(|| {
            KernelError::BooleanFailed {
                reason: "truck or() returned None".to_string(),
            }
        })?;
        Ok(self.store_solid(result))
    }

    fn boolean_subtract(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?;
        let mut solid_b = self.get_solid(b)?.clone();

        // Subtraction = A ∩ ¬B. not() mutates in place.
        solid_b.not();
        let result = truck_shapeops::and(solid_a, &solid_b, BOOLEAN_TOLERANCE).ok_or_else(|| {
            KernelError::BooleanFailed {
                reason: "truck and() returned None for subtraction".to_string(),
            }
        })?;
        Ok(self.store_solid(result))
    }

    fn boolean_intersect(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?;
        let solid_b = self.get_solid(b)?;

        let result = truck_shapeops::and(solid_a, solid_b, BOOLEAN_TOLERANCE).ok_or_else(|| {
            KernelError::BooleanFailed {
                reason: "truck and() returned None".to_string(),
            }
        })?;
        Ok(self.store_solid(result))
    }

    fn translate(&mut self, solid: &SolidHandle, offset: Vec3) -> Result<SolidHandle, KernelError> {
        let moved = builder::translated(
            self.get_solid(solid)?,
            Vector3::new(offset[0], offset[1], offset[2]),
        );
        Ok(self.store_solid(moved))
    }

    fn rotate(&mut self, solid: &SolidHandle, angles: Vec3) -> Result<SolidHandle, KernelError> {
        let axes = [Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z()];
        let mut rotated = self.get_solid(solid)?.clone();
        for (axis, &angle) in axes.into_iter().zip(angles.iter()) {
            if angle != 0.0 {
                rotated = builder::rotated(&rotated, Point3::origin(), axis, Rad(angle));
            }
        }
        Ok(self.store_solid(rotated))
    }

    fn scission(&mut self, solid: &SolidHandle) -> Result<Vec<SolidHandle>, KernelError> {
        let shells = self.get_solid(solid)?.boundaries().clone();
        let mut pieces = Vec::with_capacity(shells.len());
        for shell in shells {
            let piece = Solid::try_new(vec![shell]).map_err(|e| KernelError::Other {
                message: format!("shell is not a closed solid: {e}"),
            })?;
            pieces.push(self.store_solid(piece));
        }
        Ok(pieces)
    }

    fn colorize(&mut self, solid: &SolidHandle, color: Rgba) -> Result<SolidHandle, KernelError> {
        let copy = self.get_solid(solid)?.clone();
        let handle = self.store_solid(copy);
        self.colors.insert(handle.id(), color);
        Ok(handle)
    }
}

impl KernelIntrospect for TruckKernel {
    fn bounding_box(&self, solid: &SolidHandle) -> Result<BoundingBox, KernelError> {
        tessellation::bounding_box(self.get_solid(solid)?, MESH_TOLERANCE)
    }

    fn color(&self, solid: &SolidHandle) -> Option<Rgba> {
        self.colors.get(&solid.id()).copied()
    }
}
