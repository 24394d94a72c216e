use box_assembly::AssemblyOptions;
use box_types::Rgba;

/// Preview colours, cycled by part index.
pub const DEFAULT_PALETTE: [&str; 2] = ["#0F8FFF", "#0875D4"];

/// Settings for one pipeline caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub assembly: AssemblyOptions,
    /// Preview colours. An empty palette leaves solids uncoloured.
    pub palette: Vec<Rgba>,
    /// Edge length of the cube returned when the interactive path fails.
    pub fallback_size: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            assembly: AssemblyOptions::default(),
            palette: DEFAULT_PALETTE.iter().filter_map(|hex| Rgba::from_hex(hex)).collect(),
            fallback_size: 1.0,
        }
    }
}

impl PipelineConfig {
    /// Preview colour for the part at `index`.
    pub fn color_for(&self, index: usize) -> Option<Rgba> {
        if self.palette.is_empty() {
            return None;
        }
        self.palette.get(index % self.palette.len()).copied()
    }
}
