//! One pipeline run, kept together with the kernel that owns its solids.

use box_assembly::KernelBundle;
use box_pipeline::{resolve, resolve_for_export, PipelineConfig, ResolveOutcome};
use box_types::{FormParameters, RenderMode};
use csg_kernel::{BoundingBox, MockKernel, SolidHandle, TruckKernel, Vec3};

use crate::helpers::HarnessError;

/// The solids from one `resolve` call and the kernel that built them.
///
/// ```ignore
/// let run = BoxRun::mock(&helpers::small_insert_box(), RenderMode::Preview);
/// run.assert_solid_count(2)?;
/// let lid = run.bounds(1)?;
/// ```
pub struct BoxRun<K: KernelBundle> {
    pub kernel: K,
    pub params: FormParameters,
    pub mode: RenderMode,
    pub solids: Vec<SolidHandle>,
}

impl BoxRun<MockKernel> {
    /// Run on a fresh [`MockKernel`] with the default config.
    pub fn mock(params: &FormParameters, mode: RenderMode) -> Self {
        Self::new(MockKernel::new(), params, mode, &PipelineConfig::default())
    }

    /// Whether the solid at `index` contains `point`.
    pub fn contains(&self, index: usize, point: Vec3) -> Result<bool, HarnessError> {
        Ok(self.kernel.contains_point(self.solid(index)?, point)?)
    }
}

impl BoxRun<TruckKernel> {
    /// Run on a fresh [`TruckKernel`] with the default config.
    pub fn truck(params: &FormParameters, mode: RenderMode) -> Self {
        Self::new(TruckKernel::new(), params, mode, &PipelineConfig::default())
    }
}

impl<K: KernelBundle> BoxRun<K> {
    pub fn new(
        mut kernel: K,
        params: &FormParameters,
        mode: RenderMode,
        config: &PipelineConfig,
    ) -> Self {
        let solids = resolve(&mut kernel, params, mode, config);
        Self {
            kernel,
            params: params.clone(),
            mode,
            solids,
        }
    }

    /// Re-run the same parameters through the export path on this kernel.
    pub fn export(&mut self, config: &PipelineConfig) -> ResolveOutcome {
        resolve_for_export(&mut self.kernel, &self.params, config)
    }

    pub fn solid(&self, index: usize) -> Result<&SolidHandle, HarnessError> {
        self.solids.get(index).ok_or(HarnessError::NoSolid {
            index,
            count: self.solids.len(),
        })
    }

    pub fn bounds(&self, index: usize) -> Result<BoundingBox, HarnessError> {
        Ok(self.kernel.bounding_box(self.solid(index)?)?)
    }

    /// Bounding boxes of every returned solid, in order.
    pub fn all_bounds(&self) -> Result<Vec<BoundingBox>, HarnessError> {
        (0..self.solids.len()).map(|i| self.bounds(i)).collect()
    }

    pub fn assert_solid_count(&self, expected: usize) -> Result<(), HarnessError> {
        crate::assertions::assert_solid_count(&self.solids, expected, &self.context())
    }

    /// Every solid carries a preview colour.
    pub fn assert_colored(&self) -> Result<(), HarnessError> {
        for (i, solid) in self.solids.iter().enumerate() {
            if self.kernel.color(solid).is_none() {
                return Err(HarnessError::AssertionFailed {
                    detail: format!("[{}] solid {} has no colour", self.context(), i),
                });
            }
        }
        Ok(())
    }

    fn context(&self) -> String {
        format!(
            "{:?} {:?}/{:?} lid, {:?}",
            self.mode, self.params.dimension_type, self.params.lid_type, self.params.is_print_mode
        )
    }
}
