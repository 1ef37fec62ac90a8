//! Host world seams.
//!
//! The editor never owns block storage. Everything it reads or writes goes
//! through these traits, which the embedding world implements.

use crate::core::types::BlockCoord;
use super::block::BlockInfo;

/// Synchronous block storage access.
pub trait BlockStore {
    /// Read a cell. Unloaded or out-of-range cells return [`BlockInfo::INVALID`].
    fn get_block(&self, at: BlockCoord) -> BlockInfo;

    /// Write a cell, returning whether the write landed.
    fn set_block(&mut self, at: BlockCoord, block: BlockInfo) -> bool;

    /// Write a cell and return what was there before the write.
    fn get_and_set_block(&mut self, at: BlockCoord, block: BlockInfo) -> BlockInfo {
        let previous = self.get_block(at);
        if previous.is_valid() && self.set_block(at, block) {
            previous
        } else {
            BlockInfo::INVALID
        }
    }
}

/// Everything else the editor needs from the embedding world.
pub trait HostWorld: BlockStore {
    /// Block the player currently stands in
    fn player_location(&self) -> BlockCoord;

    /// Show a transient advisory message. Never affects editor outcomes.
    fn spawn_hint_text(&mut self, at: BlockCoord, text: &str);
}
