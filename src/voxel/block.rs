//! Block data types

use serde::{Deserialize, Serialize};

use crate::core::types::BlockCoord;

/// Identifier of a mod-defined block variant
pub type CustomBlockId = u32;

/// Block category as reported by the host world
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Unloaded or out-of-range cell
    Invalid,
    #[default]
    Air,
    Stone,
    Dirt,
    Grass,
    Sand,
    Gravel,
    Wood,
    Planks,
    Leaves,
    Glass,
    Water,
    /// Mod-defined block, distinguished by its custom id
    Mod,
}

/// What sits in one cell: a category plus an optional mod variant id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockInfo {
    pub kind: BlockKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<CustomBlockId>,
}

impl BlockInfo {
    /// Empty cell
    pub const AIR: BlockInfo = BlockInfo::new(BlockKind::Air);

    /// Sentinel returned for cells the host has not loaded
    pub const INVALID: BlockInfo = BlockInfo::new(BlockKind::Invalid);

    /// Create a plain block of the given category
    pub const fn new(kind: BlockKind) -> Self {
        Self { kind, custom_id: None }
    }

    /// Create a mod block with the given custom id
    pub const fn custom(id: CustomBlockId) -> Self {
        Self {
            kind: BlockKind::Mod,
            custom_id: Some(id),
        }
    }

    /// False only for the unloaded sentinel
    pub fn is_valid(&self) -> bool {
        self.kind != BlockKind::Invalid
    }

    /// Check if block is air
    pub fn is_air(&self) -> bool {
        self.kind == BlockKind::Air
    }

    /// Check if this is the given mod block
    pub fn has_custom_id(&self, id: CustomBlockId) -> bool {
        self.custom_id == Some(id)
    }
}

impl From<BlockKind> for BlockInfo {
    fn from(kind: BlockKind) -> Self {
        BlockInfo::new(kind)
    }
}

/// A block kind at a location.
///
/// Used for live painting, for reverse deltas and for clipboard
/// entries (where the coordinate is relative).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub block: BlockInfo,
    pub at: BlockCoord,
}

impl PlacedBlock {
    pub fn new(block: BlockInfo, at: BlockCoord) -> Self {
        Self { block, at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_includes_custom_id() {
        assert_eq!(BlockInfo::custom(3026), BlockInfo::custom(3026));
        assert_ne!(BlockInfo::custom(3026), BlockInfo::custom(3027));
        assert_ne!(BlockInfo::new(BlockKind::Mod), BlockInfo::custom(3026));
        assert_eq!(BlockInfo::from(BlockKind::Stone), BlockInfo::new(BlockKind::Stone));
    }

    #[test]
    fn test_sentinels() {
        assert!(BlockInfo::AIR.is_air());
        assert!(BlockInfo::AIR.is_valid());
        assert!(!BlockInfo::INVALID.is_valid());
        assert_eq!(BlockInfo::default(), BlockInfo::AIR);
    }

    #[test]
    fn test_json_omits_missing_custom_id() {
        let json = serde_json::to_string(&BlockInfo::new(BlockKind::Stone)).unwrap();
        assert_eq!(json, r#"{"kind":"Stone"}"#);
        let back: BlockInfo = serde_json::from_str(r#"{"kind":"Mod","custom_id":3027}"#).unwrap();
        assert!(back.has_custom_id(3027));
    }
}
