//! Reversible region edits.
//!
//! Every write the editor performs goes through [`RegionTransaction::record_write`],
//! which stores what the cell held before. Applying the resulting transaction
//! puts those blocks back and, in doing so, records the inverse.

use crate::core::types::BlockCoord;
use crate::math::BlockBox;
use crate::voxel::block::{BlockInfo, PlacedBlock};
use crate::voxel::store::BlockStore;
use super::mask::Mask;

/// Reverse delta: the blocks to write to undo an edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionTransaction {
    entries: Vec<PlacedBlock>,
}

impl RegionTransaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create transaction with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Write `block` at `at` and remember what was there.
    ///
    /// Returns false (and records nothing) if the store reports the cell
    /// unloaded.
    pub fn record_write(&mut self, store: &mut impl BlockStore, at: BlockCoord, block: BlockInfo) -> bool {
        let previous = store.get_and_set_block(at, block);
        if !previous.is_valid() {
            log::warn!("write to {} skipped: cell not loaded", at);
            return false;
        }
        self.entries.push(PlacedBlock::new(previous, at));
        true
    }

    /// Entries in write order
    pub fn entries(&self) -> &[PlacedBlock] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Paint every cell of `region` with `block`.
///
/// With a mask, cells whose current block is not whitelisted are left alone.
pub fn paint_box(
    store: &mut impl BlockStore,
    region: &BlockBox,
    block: BlockInfo,
    mask: Option<&Mask>,
) -> RegionTransaction {
    let mut transaction = RegionTransaction::with_capacity(region.cell_count() as usize);

    for at in region.cells() {
        if let Some(mask) = mask {
            if !mask.matches(&store.get_block(at)) {
                continue;
            }
        }
        transaction.record_write(store, at, block);
    }

    log::debug!(
        "painted {} of {} cells in {}..{} with {:?}",
        transaction.len(),
        region.cell_count(),
        region.min,
        region.max,
        block.kind
    );
    transaction
}

/// Replace every cell of `region` with air.
pub fn clear_box(store: &mut impl BlockStore, region: &BlockBox) -> RegionTransaction {
    paint_box(store, region, BlockInfo::AIR, None)
}

/// Execute a reverse delta, returning the delta that reverses it.
///
/// Entries are written newest first so a cell written more than once ends
/// up holding its oldest recorded value. The returned transaction lists
/// its entries in the order they were written here, which makes it valid
/// input for the next `apply`.
pub fn apply(store: &mut impl BlockStore, transaction: &RegionTransaction) -> RegionTransaction {
    let mut inverse = RegionTransaction::with_capacity(transaction.len());
    for entry in transaction.entries.iter().rev() {
        inverse.record_write(store, entry.at, entry.block);
    }
    inverse
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::block::BlockKind;
    use crate::voxel::memory::MemoryWorld;

    const STONE: BlockInfo = BlockInfo::new(BlockKind::Stone);
    const DIRT: BlockInfo = BlockInfo::new(BlockKind::Dirt);
    const GRASS: BlockInfo = BlockInfo::new(BlockKind::Grass);

    fn world() -> MemoryWorld {
        MemoryWorld::new(BlockBox::from_corners(BlockCoord::splat(-16), BlockCoord::splat(16)))
    }

    fn snapshot(world: &MemoryWorld, region: &BlockBox) -> Vec<BlockInfo> {
        region.cells().map(|at| world.get_block(at)).collect()
    }

    #[test]
    fn test_paint_3x1x3() {
        let mut world = world();
        let region = BlockBox::from_corners(BlockCoord::ZERO, BlockCoord::new(2, 0, 2));
        world.set_block(BlockCoord::new(1, 0, 1), DIRT);

        let transaction = paint_box(&mut world, &region, STONE, None);
        assert_eq!(transaction.len(), 9);
        assert!(region.cells().all(|at| world.get_block(at) == STONE));

        let restored = transaction
            .entries()
            .iter()
            .find(|e| e.at == BlockCoord::new(1, 0, 1))
            .unwrap();
        assert_eq!(restored.block, DIRT);
    }

    #[test]
    fn test_paint_then_apply_round_trip() {
        let mut world = world();
        let region = BlockBox::from_corners(BlockCoord::new(-2, -1, 0), BlockCoord::new(3, 2, 2));
        world.fill(BlockBox::from_corners(BlockCoord::new(-2, -1, 0), BlockCoord::new(0, 2, 0)), GRASS);
        world.set_block(BlockCoord::new(3, 2, 2), BlockInfo::custom(4100));
        let before = snapshot(&world, &region);

        let transaction = paint_box(&mut world, &region, STONE, None);
        let inverse = apply(&mut world, &transaction);
        assert_eq!(snapshot(&world, &region), before);

        // And the inverse reapplies the paint
        apply(&mut world, &inverse);
        assert!(region.cells().all(|at| world.get_block(at) == STONE));
    }

    #[test]
    fn test_masked_paint_skips_unmatched() {
        let mut world = world();
        let region = BlockBox::from_corners(BlockCoord::ZERO, BlockCoord::new(3, 0, 0));
        world.set_block(BlockCoord::new(0, 0, 0), GRASS);
        world.set_block(BlockCoord::new(2, 0, 0), GRASS);
        world.set_block(BlockCoord::new(3, 0, 0), DIRT);

        let mask = Mask::new(vec![GRASS], 3027);
        let transaction = paint_box(&mut world, &region, STONE, Some(&mask));

        assert_eq!(transaction.len(), 2);
        assert_eq!(world.get_block(BlockCoord::new(0, 0, 0)), STONE);
        assert_eq!(world.get_block(BlockCoord::new(1, 0, 0)), BlockInfo::AIR);
        assert_eq!(world.get_block(BlockCoord::new(2, 0, 0)), STONE);
        assert_eq!(world.get_block(BlockCoord::new(3, 0, 0)), DIRT);
    }

    #[test]
    fn test_masked_paint_with_air_filter() {
        let mut world = world();
        let region = BlockBox::from_corners(BlockCoord::ZERO, BlockCoord::new(2, 0, 0));
        world.set_block(BlockCoord::new(1, 0, 0), DIRT);

        let mask = Mask::new(vec![BlockInfo::custom(3027)], 3027);
        let transaction = paint_box(&mut world, &region, STONE, Some(&mask));

        assert_eq!(transaction.len(), 2);
        assert_eq!(world.get_block(BlockCoord::new(1, 0, 0)), DIRT);
    }

    #[test]
    fn test_apply_restores_duplicate_writes() {
        let mut world = world();
        let at = BlockCoord::new(4, 4, 4);
        world.set_block(at, GRASS);

        let mut transaction = RegionTransaction::new();
        transaction.record_write(&mut world, at, DIRT);
        transaction.record_write(&mut world, at, STONE);
        assert_eq!(world.get_block(at), STONE);

        let inverse = apply(&mut world, &transaction);
        assert_eq!(world.get_block(at), GRASS);

        let again = apply(&mut world, &inverse);
        assert_eq!(world.get_block(at), STONE);
        assert_eq!(again, transaction);
    }

    #[test]
    fn test_unloaded_cells_not_recorded() {
        let mut world = MemoryWorld::new(BlockBox::from_corners(BlockCoord::ZERO, BlockCoord::new(1, 0, 0)));
        let region = BlockBox::from_corners(BlockCoord::ZERO, BlockCoord::new(3, 0, 0));

        let transaction = paint_box(&mut world, &region, STONE, None);
        assert_eq!(transaction.len(), 2);
    }

    #[test]
    fn test_clear_box() {
        let mut world = world();
        let region = BlockBox::from_corners(BlockCoord::ZERO, BlockCoord::ONE);
        world.fill(region, DIRT);

        let transaction = clear_box(&mut world, &region);
        assert_eq!(transaction.len(), 8);
        assert_eq!(world.solid_count(), 0);
        assert!(transaction.entries().iter().all(|e| e.block == DIRT));
    }

    #[test]
    fn test_apply_empty() {
        let mut world = world();
        let inverse = apply(&mut world, &RegionTransaction::new());
        assert!(inverse.is_empty());
    }
}
