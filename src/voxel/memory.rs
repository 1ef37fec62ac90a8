//! In-memory host world.
//!
//! Backs the replay tool, benchmarks and tests. Cells inside the loaded box
//! default to air; everything outside reads as invalid and rejects writes.

use std::collections::HashMap;

use crate::core::types::BlockCoord;
use crate::math::BlockBox;
use super::block::BlockInfo;
use super::store::{BlockStore, HostWorld};

/// A hint the editor asked the host to show
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintRecord {
    pub at: BlockCoord,
    pub text: String,
}

/// HashMap-backed world with a fixed loaded region
pub struct MemoryWorld {
    /// Non-air blocks
    blocks: HashMap<BlockCoord, BlockInfo>,
    /// Region that reads as loaded
    loaded: BlockBox,
    /// Reported player position
    player: BlockCoord,
    /// Hints spawned so far, oldest first
    hints: Vec<HintRecord>,
}

impl MemoryWorld {
    /// Create an all-air world loaded within `loaded`
    pub fn new(loaded: BlockBox) -> Self {
        Self {
            blocks: HashMap::new(),
            loaded,
            player: loaded.min,
            hints: Vec::new(),
        }
    }

    /// The loaded region
    pub fn loaded(&self) -> BlockBox {
        self.loaded
    }

    /// Move the reported player position
    pub fn set_player_location(&mut self, at: BlockCoord) {
        self.player = at;
    }

    /// Fill every loaded cell of `region` with `block`
    pub fn fill(&mut self, region: BlockBox, block: BlockInfo) {
        for at in region.cells() {
            self.set_block(at, block);
        }
    }

    /// Number of non-air blocks stored
    pub fn solid_count(&self) -> usize {
        self.blocks.len()
    }

    /// Hints spawned so far
    pub fn hints(&self) -> &[HintRecord] {
        &self.hints
    }

    /// Take spawned hints (clears the list)
    pub fn take_hints(&mut self) -> Vec<HintRecord> {
        std::mem::take(&mut self.hints)
    }
}

impl BlockStore for MemoryWorld {
    fn get_block(&self, at: BlockCoord) -> BlockInfo {
        if !self.loaded.contains(at) {
            return BlockInfo::INVALID;
        }
        self.blocks.get(&at).copied().unwrap_or(BlockInfo::AIR)
    }

    fn set_block(&mut self, at: BlockCoord, block: BlockInfo) -> bool {
        if !self.loaded.contains(at) || !block.is_valid() {
            return false;
        }
        if block.is_air() {
            self.blocks.remove(&at);
        } else {
            self.blocks.insert(at, block);
        }
        true
    }
}

impl HostWorld for MemoryWorld {
    fn player_location(&self) -> BlockCoord {
        self.player
    }

    fn spawn_hint_text(&mut self, at: BlockCoord, text: &str) {
        log::debug!("hint at {}: {}", at, text);
        self.hints.push(HintRecord {
            at,
            text: text.to_string(),
        });
    }
}
