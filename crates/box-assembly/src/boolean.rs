use csg_kernel::SolidHandle;

use crate::kernel_ext::KernelBundle;
use crate::types::AssemblyError;

/// Boolean operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanKind {
    Union,
    Subtract,
    Intersect,
}

/// A boolean operand that may have no volume.
///
/// `Empty` stands in for a part whose computed size is non-positive. It is
/// resolved algebraically and never handed to the kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Solid(SolidHandle),
    Empty,
}

impl Operand {
    pub fn is_empty(&self) -> bool {
        matches!(self, Operand::Empty)
    }

    pub fn into_solid(self) -> Option<SolidHandle> {
        match self {
            Operand::Solid(handle) => Some(handle),
            Operand::Empty => None,
        }
    }
}

impl From<SolidHandle> for Operand {
    fn from(handle: SolidHandle) -> Self {
        Operand::Solid(handle)
    }
}

/// Execute a boolean operation, short-circuiting empty operands.
pub fn execute_boolean(
    kb: &mut dyn KernelBundle,
    a: Operand,
    b: Operand,
    kind: BooleanKind,
) -> Result<Operand, AssemblyError> {
    let (a, b) = match (a, b, kind) {
        (Operand::Solid(a), Operand::Solid(b), _) => (a, b),
        // ∅ ∪ b = b, a ∪ ∅ = a
        (a, Operand::Empty, BooleanKind::Union) => return Ok(a),
        (Operand::Empty, b, BooleanKind::Union) => return Ok(b),
        // a − ∅ = a, ∅ − b = ∅
        (a, Operand::Empty, BooleanKind::Subtract) => return Ok(a),
        (Operand::Empty, _, BooleanKind::Subtract) => return Ok(Operand::Empty),
        // anything ∩ ∅ = ∅
        (_, _, BooleanKind::Intersect) => return Ok(Operand::Empty),
    };

    let handle = match kind {
        BooleanKind::Union => kb.boolean_union(&a, &b)?,
        BooleanKind::Subtract => kb.boolean_subtract(&a, &b)?,
        BooleanKind::Intersect => kb.boolean_intersect(&a, &b)?,
    };
    Ok(Operand::Solid(handle))
}

/// Union every operand into one, skipping empties.
pub fn union_all(
    kb: &mut dyn KernelBundle,
    operands: impl IntoIterator<Item = Operand>,
) -> Result<Operand, AssemblyError> {
    operands
        .into_iter()
        .try_fold(Operand::Empty, |acc, next| {
            execute_boolean(&mut *kb, acc, next, BooleanKind::Union)
        })
}
