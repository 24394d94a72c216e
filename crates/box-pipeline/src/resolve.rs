//! The two pipeline entry points and their failure policies.

use box_assembly::{assemble, AssemblyError, Diagnostics, KernelBundle};
use box_layout::plan_layout;
use box_types::{FormParameters, RenderMode};
use csg_kernel::SolidHandle;
use tracing::{debug, error, instrument};

use crate::config::PipelineConfig;

/// Result of an export run.
#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    /// Every part was built as requested.
    Complete(Vec<SolidHandle>),
    /// Solids were built but some sub-parts were skipped.
    Degraded {
        solids: Vec<SolidHandle>,
        warnings: Vec<String>,
    },
    /// The kernel rejected the model. Nothing should be written.
    Failed { error: AssemblyError },
}

impl ResolveOutcome {
    /// The built solids, if any.
    pub fn solids(&self) -> Option<&[SolidHandle]> {
        match self {
            Self::Complete(solids) | Self::Degraded { solids, .. } => Some(solids),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Plan, assemble and (in preview) colour the parts.
fn build(
    kb: &mut dyn KernelBundle,
    params: &FormParameters,
    mode: RenderMode,
    config: &PipelineConfig,
) -> Result<(Vec<SolidHandle>, Diagnostics), AssemblyError> {
    let plan = plan_layout(params, mode, &config.assembly.layout);
    let parts = assemble(kb, &plan, params, &config.assembly)?;
    let mut solids = parts.solids();

    if mode.is_preview() {
        for (index, solid) in solids.iter_mut().enumerate() {
            if let Some(color) = config.color_for(index) {
                *solid = kb.colorize(solid, color)?;
            }
        }
    }

    debug!(
        solids = solids.len(),
        warnings = parts.diagnostics.warnings.len(),
        "pipeline finished"
    );
    Ok((solids, parts.diagnostics))
}

/// Interactive path: always returns something renderable.
///
/// Box first, then lid. A kernel failure is logged and replaced by a single
/// fallback cube centred on the origin. The result is only empty if the
/// kernel cannot build even that.
#[instrument(skip_all, fields(mode = ?mode))]
pub fn resolve(
    kb: &mut dyn KernelBundle,
    params: &FormParameters,
    mode: RenderMode,
    config: &PipelineConfig,
) -> Vec<SolidHandle> {
    match build(kb, params, mode, config) {
        Ok((solids, _)) => solids,
        Err(err) => {
            error!(error = %err, "geometry pipeline failed; using fallback solid");
            let edge = config.fallback_size;
            match kb.cuboid([edge; 3], [0.0; 3]) {
                Ok(cube) => vec![cube],
                Err(err) => {
                    error!(error = %err, "fallback solid failed");
                    Vec::new()
                }
            }
        }
    }
}

/// Export path: print-quality tessellation, no colours, no fallback.
#[instrument(skip_all)]
pub fn resolve_for_export(
    kb: &mut dyn KernelBundle,
    params: &FormParameters,
    config: &PipelineConfig,
) -> ResolveOutcome {
    match build(kb, params, RenderMode::Export, config) {
        Ok((solids, diagnostics)) if diagnostics.is_degraded() => ResolveOutcome::Degraded {
            solids,
            warnings: diagnostics.warnings,
        },
        Ok((solids, _)) => ResolveOutcome::Complete(solids),
        Err(err) => {
            error!(error = %err, "export failed");
            ResolveOutcome::Failed { error: err }
        }
    }
}
