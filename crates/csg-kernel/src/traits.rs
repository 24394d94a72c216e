use crate::types::*;

/// Solid construction and boolean composition.
/// Implemented by TruckKernel (wraps real truck) and MockKernel (deterministic test double).
///
/// Callers must not hand the kernel degenerate operands: every primitive
/// size must be strictly positive on every axis.
pub trait Kernel {
    /// Axis-aligned box of `size`, centred on `center`.
    fn cuboid(&mut self, size: Vec3, center: Vec3) -> Result<SolidHandle, KernelError>;

    /// Z-aligned cylinder centred on `center`, faceted into `segments` sides
    /// where the kernel tessellates curves.
    fn cylinder(
        &mut self,
        radius: f64,
        height: f64,
        center: Vec3,
        segments: u32,
    ) -> Result<SolidHandle, KernelError>;

    /// Rounded rectangle in the XY plane (corner radius `radius`) extruded
    /// along Z to `size[2]`, centred on `center`.
    fn extrude_rounded_rect(
        &mut self,
        size: Vec3,
        center: Vec3,
        radius: f64,
        segments: u32,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean union of two solids.
    fn boolean_union(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean subtraction: a minus b.
    fn boolean_subtract(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean intersection of two solids.
    fn boolean_intersect(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
    ) -> Result<SolidHandle, KernelError>;

    fn translate(&mut self, solid: &SolidHandle, offset: Vec3) -> Result<SolidHandle, KernelError>;

    /// Rotate about the origin by Euler angles in radians (X, then Y, then Z).
    fn rotate(&mut self, solid: &SolidHandle, angles: Vec3) -> Result<SolidHandle, KernelError>;

    /// Split a solid into its connected components.
    fn scission(&mut self, solid: &SolidHandle) -> Result<Vec<SolidHandle>, KernelError>;

    /// Tag a solid with a display colour. No geometric effect.
    fn colorize(&mut self, solid: &SolidHandle, color: Rgba) -> Result<SolidHandle, KernelError>;
}

/// Read-only queries on kernel solids.
pub trait KernelIntrospect {
    fn bounding_box(&self, solid: &SolidHandle) -> Result<BoundingBox, KernelError>;

    /// Colour assigned by [`Kernel::colorize`], if any.
    fn color(&self, solid: &SolidHandle) -> Option<Rgba>;
}
