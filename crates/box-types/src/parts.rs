use serde::{Deserialize, Serialize};

use crate::LidType;

/// Identifier of every sized part the assembler can build.
///
/// Which ids are active depends on the lid variant; see [`PartId::for_lid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartId {
    BoxOuter,
    BoxInner,
    InsertLidWallOuter,
    InsertLidWallInner,
    InsertLidTopOuter,
    CoverLidWallOuter,
    CoverLidWallInner,
    CoverLidSeatInner,
}

impl PartId {
    /// The closed set of parts sized for a given lid variant, box parts first.
    pub fn for_lid(lid: LidType) -> &'static [PartId] {
        match lid {
            LidType::Insert => &[
                Self::BoxOuter,
                Self::BoxInner,
                Self::InsertLidWallOuter,
                Self::InsertLidWallInner,
                Self::InsertLidTopOuter,
            ],
            LidType::Cover => &[
                Self::BoxOuter,
                Self::BoxInner,
                Self::CoverLidWallOuter,
                Self::CoverLidWallInner,
                Self::CoverLidSeatInner,
            ],
        }
    }

    pub fn is_lid_part(self) -> bool {
        !matches!(self, Self::BoxOuter | Self::BoxInner)
    }
}
