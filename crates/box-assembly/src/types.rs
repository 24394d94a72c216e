use box_layout::LayoutConfig;
use csg_kernel::SolidHandle;
use serde::{Deserialize, Serialize};

/// How rounded rectangular prisms are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundingStrategy {
    /// Extrude a rounded-rectangle profile along Z.
    #[default]
    Extruded,
    /// Cut one cylinder into quadrants, move them to the corners and fill
    /// between them with two cuboids.
    ChoppedCylinder,
}

/// Settings shared by every part builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssemblyOptions {
    pub strategy: RoundingStrategy,
    pub layout: LayoutConfig,
}

/// The placed box and lid produced by one assembly.
#[derive(Debug, Clone)]
pub struct AssembledParts {
    pub box_solid: SolidHandle,
    pub lid_solid: SolidHandle,
    pub diagnostics: Diagnostics,
}

impl AssembledParts {
    /// Box first, then lid.
    pub fn solids(&self) -> Vec<SolidHandle> {
        vec![self.box_solid.clone(), self.lid_solid.clone()]
    }
}

/// Non-fatal diagnostics from an assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    /// Sub-parts that were skipped or degraded, in build order.
    pub warnings: Vec<String>,
    /// Segment count used for rounded corners.
    pub segments: u32,
}

impl Diagnostics {
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "degraded sub-part");
        self.warnings.push(message);
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Errors from assembling parts.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssemblyError {
    #[error("kernel error: {0}")]
    Kernel(#[from] csg_kernel::KernelError),

    #[error("{part} has no volume")]
    EmptyPart { part: &'static str },
}
