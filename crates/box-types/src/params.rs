use serde::{Deserialize, Serialize};

/// What the user-facing width/depth/height numbers measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DimensionType {
    /// Size of a single compartment.
    Section,
    /// Size of the cavity inside the walls.
    Inner,
    /// Size of the box body, walls included.
    Outer,
}

impl DimensionType {
    pub const ALL: [DimensionType; 3] = [Self::Section, Self::Inner, Self::Outer];

    pub fn label(self) -> &'static str {
        match self {
            Self::Section => "Compartment",
            Self::Inner => "Inner",
            Self::Outer => "Outer",
        }
    }
}

/// How the lid mates with the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LidType {
    /// Drops into the box cavity from above.
    Insert,
    /// Caps over the outside of the box walls.
    Cover,
}

impl LidType {
    pub const ALL: [LidType; 2] = [Self::Insert, Self::Cover];

    pub fn label(self) -> &'static str {
        match self {
            Self::Insert => "Insert",
            Self::Cover => "Cover",
        }
    }
}

/// Which caller is asking for geometry.
///
/// Preview runs on every parameter edit and wants coarse tessellation;
/// export runs on demand and wants print quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Preview,
    Export,
}

impl RenderMode {
    pub fn is_preview(self) -> bool {
        matches!(self, Self::Preview)
    }
}

/// The flat set of user-tunable box parameters.
///
/// Values are assumed to already satisfy the form schema's numeric bounds.
/// Nothing here is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormParameters {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub wall_thickness: f64,

    pub sections_across: u32,
    pub sections_deep: u32,
    pub internal_wall_thickness: f64,
    pub internal_wall_height: f64,

    pub lid_thickness: f64,
    pub lid_wall_thickness: f64,
    pub lid_depth: f64,
    pub lid_overhang: f64,
    pub lid_inner_depth: f64,
    pub lid_tolerance: f64,
    pub lid_cutout: bool,

    /// Gap between box and lid in the print-in-place layout.
    pub spacing: f64,
    pub is_print_mode: bool,
    pub is_cross_section_mode: bool,

    pub dimension_type: DimensionType,
    pub lid_type: LidType,
}

impl Default for FormParameters {
    fn default() -> Self {
        Self {
            width: 40.0,
            depth: 40.0,
            height: 30.0,
            corner_radius: 3.0,
            wall_thickness: 1.5,
            sections_across: 1,
            sections_deep: 1,
            internal_wall_thickness: 1.0,
            internal_wall_height: 100.0,
            lid_thickness: 1.5,
            lid_wall_thickness: 1.5,
            lid_depth: 5.0,
            lid_overhang: 0.0,
            lid_inner_depth: 0.0,
            lid_tolerance: 0.2,
            lid_cutout: true,
            spacing: 6.0,
            is_print_mode: true,
            is_cross_section_mode: false,
            dimension_type: DimensionType::Outer,
            lid_type: LidType::Insert,
        }
    }
}

/// Errors reading or writing parameter documents.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("malformed parameter document: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormParameters {
    /// Parse a (possibly partial) JSON parameter document; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string(self)?)
    }
}
