use csg_kernel::{Kernel, KernelIntrospect};

/// A kernel the part builders can both drive and query.
///
/// Builders take `&mut dyn KernelBundle` so one borrow covers construction
/// calls and the occasional read-back (bounding boxes of split pieces).
pub trait KernelBundle: Kernel + KernelIntrospect {
    fn as_introspect(&self) -> &dyn KernelIntrospect;
}

impl<T: Kernel + KernelIntrospect> KernelBundle for T {
    fn as_introspect(&self) -> &dyn KernelIntrospect {
        self
    }
}
