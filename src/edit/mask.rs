//! Paint mask read from a column of marker blocks.
//!
//! The blocks stacked directly above the mask anchor form a whitelist: a
//! painted cell is only touched if its current block matches one of them.
//! The air-filter block stands in for air, which cannot be stacked.

use crate::core::types::{BlockCoord, MAX_Z, UP};
use crate::voxel::block::{BlockInfo, CustomBlockId};
use crate::voxel::store::BlockStore;

/// Whitelist of block kinds
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mask {
    entries: Vec<BlockInfo>,
    air_filter: CustomBlockId,
}

impl Mask {
    /// Build a mask from explicit entries
    pub fn new(entries: Vec<BlockInfo>, air_filter: CustomBlockId) -> Self {
        Self { entries, air_filter }
    }

    /// Read the mask column above `anchor`.
    ///
    /// The scan stops at the first air block, at the first unloaded cell, or
    /// at the top of the world. Whatever was read up to that point is the mask.
    pub fn collect(store: &impl BlockStore, anchor: BlockCoord, air_filter: CustomBlockId) -> Self {
        let mut entries = Vec::new();
        let mut at = anchor + UP;

        while at.z <= MAX_Z {
            let block = store.get_block(at);
            if block.is_air() || !block.is_valid() {
                break;
            }
            entries.push(block);
            at += UP;
        }

        log::debug!("mask above {} has {} entries", anchor, entries.len());
        Self { entries, air_filter }
    }

    /// Check if a block is whitelisted
    pub fn matches(&self, candidate: &BlockInfo) -> bool {
        self.entries.iter().any(|entry| {
            (candidate.is_air() && entry.has_custom_id(self.air_filter)) || entry == candidate
        })
    }

    pub fn entries(&self) -> &[BlockInfo] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
