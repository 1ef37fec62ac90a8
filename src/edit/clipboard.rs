//! Clipboard buffer.
//!
//! Holds a snapshot of a box with coordinates relative to the box's minimum
//! corner, together with the box extents. Rotations and mirrors remap the
//! coordinates in place and keep the extents in step, so every entry always
//! lies within `[0, width] x [0, length] x [0, height]`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::{BlockCoord, Result, UP};
use crate::math::BlockBox;
use crate::voxel::block::{BlockInfo, CustomBlockId, PlacedBlock};
use crate::voxel::store::BlockStore;
use super::transaction::{self, RegionTransaction};

/// Axis for mirroring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Distance between the captured box's corners on each axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extents {
    /// Along X
    pub width: i64,
    /// Along Y
    pub length: i64,
    /// Along Z
    pub height: i64,
}

impl Extents {
    fn contains(&self, rel: BlockCoord) -> bool {
        (0..=self.width).contains(&rel.x)
            && (0..=self.length).contains(&rel.y)
            && (0..=self.height).contains(&rel.z)
    }
}

/// Origin-relative snapshot of a region
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipboard {
    entries: Vec<PlacedBlock>,
    extents: Extents,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a snapshot of `region`. Does not touch the world.
    pub fn copy(&mut self, store: &impl BlockStore, region: &BlockBox) {
        self.clear();
        let extents = region.extents();
        self.extents = Extents {
            width: extents.x,
            length: extents.y,
            height: extents.z,
        };
        self.entries.reserve(region.cell_count() as usize);
        for at in region.cells() {
            self.entries.push(PlacedBlock::new(store.get_block(at), at - region.min));
        }
        log::debug!("copied {} blocks, extents {:?}", self.entries.len(), self.extents);
    }

    /// Snapshot `region`, then clear it to air. Returns the clearing's reverse delta.
    pub fn cut(&mut self, store: &mut impl BlockStore, region: &BlockBox) -> RegionTransaction {
        self.copy(store, region);
        transaction::clear_box(store, region)
    }

    /// Write the contents with their origin at `target`.
    ///
    /// If the cell above `target` holds the air-filter block, the paste is
    /// replacing a placeholder: the target and air-filter cells are cleared
    /// first and air entries are skipped so existing terrain survives.
    pub fn paste(
        &self,
        store: &mut impl BlockStore,
        target: BlockCoord,
        air_filter: CustomBlockId,
    ) -> Result<RegionTransaction> {
        if self.is_empty() {
            return Err(Error::EmptyClipboard);
        }

        let mut transaction = RegionTransaction::with_capacity(self.entries.len() + 2);
        let skip_air = store.get_block(target + UP).has_custom_id(air_filter);
        if skip_air {
            transaction.record_write(store, target, BlockInfo::AIR);
            transaction.record_write(store, target + UP, BlockInfo::AIR);
        }

        for entry in &self.entries {
            if skip_air && entry.block.is_air() {
                continue;
            }
            transaction.record_write(store, target + entry.at, entry.block);
        }

        log::debug!("pasted {} blocks at {} (skip air: {})", transaction.len(), target, skip_air);
        Ok(transaction)
    }

    /// Rotate 90° clockwise about the vertical axis.
    pub fn rotate_clockwise(&mut self) {
        let width = self.extents.width;
        for entry in &mut self.entries {
            let at = entry.at;
            entry.at = BlockCoord::new(at.y, width - at.x, at.z);
        }
        self.swap_horizontal_extents();
    }

    /// Rotate 90° counter-clockwise about the vertical axis.
    pub fn rotate_counter_clockwise(&mut self) {
        let length = self.extents.length;
        for entry in &mut self.entries {
            let at = entry.at;
            entry.at = BlockCoord::new(length - at.y, at.x, at.z);
        }
        self.swap_horizontal_extents();
    }

    /// Mirror across the plane perpendicular to `axis`. Extents are unchanged.
    pub fn mirror(&mut self, axis: Axis) {
        let extents = self.extents;
        for entry in &mut self.entries {
            match axis {
                Axis::X => entry.at.x = extents.width - entry.at.x,
                Axis::Y => entry.at.y = extents.length - entry.at.y,
                Axis::Z => entry.at.z = extents.height - entry.at.z,
            }
        }
    }

    fn swap_horizontal_extents(&mut self) {
        if self.is_empty() {
            return;
        }
        std::mem::swap(&mut self.extents.width, &mut self.extents.length);
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.entries.clear();
        self.extents = Extents::default();
    }

    pub fn entries(&self) -> &[PlacedBlock] {
        &self.entries
    }

    pub fn extents(&self) -> Extents {
        self.extents
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every entry lies within the extents
    pub fn validate(&self) -> Result<()> {
        let e = self.extents;
        if e.width < 0 || e.length < 0 || e.height < 0 {
            return Err(Error::InvalidClipboard(format!("negative extents {:?}", e)));
        }
        if let Some(entry) = self.entries.iter().find(|entry| !e.contains(entry.at)) {
            return Err(Error::InvalidClipboard(format!(
                "entry at {} outside extents {:?}",
                entry.at, e
            )));
        }
        Ok(())
    }

    /// Save clipboard to a JSON file.
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load clipboard from a JSON file, rejecting entries outside the extents.
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let clipboard: Clipboard = serde_json::from_str(&json)?;
        clipboard.validate()?;
        Ok(clipboard)
    }
}
