//! Editor state and the region operations that run against it.

use crate::core::error::{Error, Marker};
use crate::core::types::{BlockCoord, Result, UP};
use crate::math::BlockBox;
use crate::voxel::store::{BlockStore, HostWorld};
use super::clipboard::{Axis, Clipboard};
use super::config::{EditConfig, RoleTable};
use super::history::History;
use super::mask::Mask;
use super::mode::WandState;
use super::transaction;

/// Where the control blocks were last placed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Anchors {
    pub marker1: Option<BlockCoord>,
    pub marker2: Option<BlockCoord>,
    pub mask: Option<BlockCoord>,
    pub paint: Option<BlockCoord>,
}

/// All editor state for one loaded world.
///
/// Created when the world loads and dropped when it exits. Every operation
/// takes the host world explicitly; nothing here is global.
pub struct EditState {
    config: EditConfig,
    roles: RoleTable,
    anchors: Anchors,
    history: History,
    clipboard: Clipboard,
    wand: WandState,
}

impl EditState {
    /// Create editor state from a validated config
    pub fn new(config: EditConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            roles: RoleTable::new(&config.roles),
            history: History::new(config.history_capacity, config.clear_redo_on_edit),
            anchors: Anchors::default(),
            clipboard: Clipboard::new(),
            wand: WandState::new(),
            config,
        })
    }

    /// Resolve the selection box, checking both markers are loaded.
    pub fn selection(&self, store: &impl BlockStore) -> Result<BlockBox> {
        let marker1 = self
            .anchors
            .marker1
            .filter(|at| store.get_block(*at).is_valid())
            .ok_or(Error::MarkersUnavailable(Marker::First))?;
        let marker2 = self
            .anchors
            .marker2
            .filter(|at| store.get_block(*at).is_valid())
            .ok_or(Error::MarkersUnavailable(Marker::Second))?;

        let region = BlockBox::from_corners(marker1, marker2);
        let cells = region.cell_count();
        if cells > self.config.max_region_cells {
            return Err(Error::RegionTooLarge {
                cells,
                limit: self.config.max_region_cells,
            });
        }
        Ok(region)
    }

    /// Paint the selection with the block above the paint anchor.
    ///
    /// Returns the number of blocks changed.
    pub fn paint(&mut self, world: &mut impl HostWorld) -> Result<usize> {
        let region = self.selection(&*world)?;

        let target = self
            .anchors
            .paint
            .filter(|at| world.get_block(*at).is_valid())
            .map(|at| world.get_block(at + UP))
            .filter(|block| block.is_valid())
            .ok_or(Error::PaintTargetUnavailable)?;

        let mask = match self.anchors.mask {
            Some(anchor) if world.get_block(anchor).is_valid() => {
                let mask = Mask::collect(&*world, anchor, self.config.roles.air_filter);
                if mask.is_empty() {
                    let at = world.player_location();
                    world.spawn_hint_text(at, "Mask is empty, painting everything.");
                    None
                } else {
                    Some(mask)
                }
            }
            _ => None,
        };

        let transaction = transaction::paint_box(world, &region, target, mask.as_ref());
        let count = transaction.len();
        self.history.record(transaction);
        log::info!("painted {} blocks with {:?}", count, target.kind);
        Ok(count)
    }

    /// Revert the newest recorded edit
    pub fn undo(&mut self, store: &mut impl BlockStore) -> Result<usize> {
        let count = self.history.undo(store)?;
        log::info!("undo restored {} blocks", count);
        Ok(count)
    }

    /// Reapply the newest undone edit
    pub fn redo(&mut self, store: &mut impl BlockStore) -> Result<usize> {
        let count = self.history.redo(store)?;
        log::info!("redo rewrote {} blocks", count);
        Ok(count)
    }

    /// Copy the selection into the clipboard. Returns the number of blocks copied.
    pub fn copy(&mut self, store: &impl BlockStore) -> Result<usize> {
        let region = self.selection(store)?;
        self.clipboard.copy(store, &region);
        log::info!("copied {} blocks", self.clipboard.len());
        Ok(self.clipboard.len())
    }

    /// Copy the selection, then clear it to air as an undoable edit.
    pub fn cut(&mut self, store: &mut impl BlockStore) -> Result<usize> {
        let region = self.selection(&*store)?;
        let transaction = self.clipboard.cut(store, &region);
        let count = self.clipboard.len();
        self.history.record(transaction);
        log::info!("cut {} blocks", count);
        Ok(count)
    }

    /// Paste the clipboard with its origin at `target` as an undoable edit.
    pub fn paste(&mut self, store: &mut impl BlockStore, target: BlockCoord) -> Result<usize> {
        let transaction = self.clipboard.paste(store, target, self.config.roles.air_filter)?;
        let count = transaction.len();
        self.history.record(transaction);
        log::info!("pasted {} blocks at {}", count, target);
        Ok(count)
    }

    pub fn rotate_clockwise(&mut self) -> Result<()> {
        self.require_clipboard()?;
        self.clipboard.rotate_clockwise();
        Ok(())
    }

    pub fn rotate_counter_clockwise(&mut self) -> Result<()> {
        self.require_clipboard()?;
        self.clipboard.rotate_counter_clockwise();
        Ok(())
    }

    pub fn mirror(&mut self, axis: Axis) -> Result<()> {
        self.require_clipboard()?;
        self.clipboard.mirror(axis);
        Ok(())
    }

    /// Empty the clipboard
    pub fn clear_clipboard(&mut self) {
        self.clipboard.clear();
    }

    fn require_clipboard(&self) -> Result<()> {
        if self.clipboard.is_empty() {
            Err(Error::EmptyClipboard)
        } else {
            Ok(())
        }
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    pub fn anchors_mut(&mut self) -> &mut Anchors {
        &mut self.anchors
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Replace the clipboard, e.g. with one loaded from disk
    pub fn set_clipboard(&mut self, clipboard: Clipboard) {
        self.clipboard = clipboard;
    }

    pub fn wand(&self) -> &WandState {
        &self.wand
    }

    pub fn wand_mut(&mut self) -> &mut WandState {
        &mut self.wand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::block::{BlockInfo, BlockKind};
    use crate::voxel::memory::MemoryWorld;

    const STONE: BlockInfo = BlockInfo::new(BlockKind::Stone);
    const DIRT: BlockInfo = BlockInfo::new(BlockKind::Dirt);
    const GRASS: BlockInfo = BlockInfo::new(BlockKind::Grass);

    fn world() -> MemoryWorld {
        MemoryWorld::new(BlockBox::from_corners(BlockCoord::new(-32, -32, -8), BlockCoord::new(32, 32, 16)))
    }

    /// Editor with markers at (0,0,0) and (2,0,2) and a stone paint target
    fn setup() -> (MemoryWorld, EditState) {
        let mut world = world();
        let mut state = EditState::new(EditConfig::default()).unwrap();
        let ids = state.config().roles.clone();

        let paint = BlockCoord::new(10, 10, 0);
        world.set_block(paint, BlockInfo::custom(ids.paint));
        world.set_block(paint + UP, STONE);

        let anchors = state.anchors_mut();
        anchors.marker1 = Some(BlockCoord::ZERO);
        anchors.marker2 = Some(BlockCoord::new(2, 0, 2));
        anchors.paint = Some(paint);
        (world, state)
    }

    fn region() -> BlockBox {
        BlockBox::from_corners(BlockCoord::ZERO, BlockCoord::new(2, 0, 2))
    }

    #[test]
    fn test_paint_undo_redo_scenario() {
        let (mut world, mut state) = setup();
        world.set_block(BlockCoord::new(1, 0, 0), DIRT);
        world.set_block(BlockCoord::new(2, 0, 2), GRASS);
        let before: Vec<_> = region().cells().map(|at| world.get_block(at)).collect();

        assert_eq!(state.paint(&mut world).unwrap(), 9);
        assert!(region().cells().all(|at| world.get_block(at) == STONE));

        assert_eq!(state.undo(&mut world).unwrap(), 9);
        let after: Vec<_> = region().cells().map(|at| world.get_block(at)).collect();
        assert_eq!(after, before);

        assert_eq!(state.redo(&mut world).unwrap(), 9);
        assert!(region().cells().all(|at| world.get_block(at) == STONE));
    }

    #[test]
    fn test_markers_required() {
        let (mut world, mut state) = setup();
        state.anchors_mut().marker2 = None;
        assert!(matches!(state.paint(&mut world), Err(Error::MarkersUnavailable(Marker::Second))));

        state.anchors_mut().marker1 = Some(BlockCoord::new(0, 0, 100));
        state.anchors_mut().marker2 = Some(BlockCoord::ZERO);
        assert!(matches!(state.copy(&world), Err(Error::MarkersUnavailable(Marker::First))));
        assert_eq!(world.solid_count(), 2);
        assert_eq!(state.history().undo_len(), 0);
    }

    #[test]
    fn test_paint_target_required() {
        let (mut world, mut state) = setup();
        state.anchors_mut().paint = None;
        assert!(matches!(state.paint(&mut world), Err(Error::PaintTargetUnavailable)));

        // Anchor loaded but the block above it is not
        state.anchors_mut().paint = Some(BlockCoord::new(0, 0, 16));
        assert!(matches!(state.paint(&mut world), Err(Error::PaintTargetUnavailable)));
        assert_eq!(state.history().undo_len(), 0);
    }

    #[test]
    fn test_region_limit() {
        let (mut world, _) = setup();
        let config = EditConfig {
            max_region_cells: 8,
            ..Default::default()
        };
        let mut state = EditState::new(config).unwrap();
        state.anchors_mut().marker1 = Some(BlockCoord::ZERO);
        state.anchors_mut().marker2 = Some(BlockCoord::new(2, 0, 2));
        state.anchors_mut().paint = Some(BlockCoord::new(10, 10, 0));

        assert!(matches!(
            state.paint(&mut world),
            Err(Error::RegionTooLarge { cells: 9, limit: 8 })
        ));
    }

    #[test]
    fn test_far_markers_exceed_region_limit() {
        let far = 1i64 << 40;
        let marker1 = BlockCoord::new(-far, -far, 0);
        let marker2 = BlockCoord::new(far, far, 4);
        let world = MemoryWorld::new(BlockBox::from_corners(marker1, marker2));
        let mut state = EditState::new(EditConfig::default()).unwrap();
        state.anchors_mut().marker1 = Some(marker1);
        state.anchors_mut().marker2 = Some(marker2);

        assert!(matches!(
            state.selection(&world),
            Err(Error::RegionTooLarge { cells: u64::MAX, .. })
        ));
    }

    #[test]
    fn test_undo_with_region_unloaded_keeps_history() {
        let (mut world, mut state) = setup();
        assert_eq!(state.paint(&mut world).unwrap(), 9);

        let mut far_world = MemoryWorld::new(BlockBox::single(BlockCoord::new(100, 100, 0)));
        assert!(matches!(state.undo(&mut far_world), Err(Error::RegionUnavailable)));
        assert_eq!(state.history().undo_len(), 1);
        assert_eq!(state.history().redo_len(), 0);

        assert_eq!(state.undo(&mut world).unwrap(), 9);
        assert_eq!(world.get_block(BlockCoord::new(1, 0, 1)), BlockInfo::AIR);

        assert!(matches!(state.redo(&mut far_world), Err(Error::RegionUnavailable)));
        assert_eq!(state.history().redo_len(), 1);
        assert_eq!(state.redo(&mut world).unwrap(), 9);
        assert!(region().cells().all(|at| world.get_block(at) == STONE));
    }

    #[test]
    fn test_masked_paint() {
        let (mut world, mut state) = setup();
        let mask_anchor = BlockCoord::new(12, 10, 0);
        world.set_block(mask_anchor, BlockInfo::custom(state.config().roles.mask));
        world.set_block(mask_anchor + UP, GRASS);
        state.anchors_mut().mask = Some(mask_anchor);

        world.set_block(BlockCoord::new(1, 0, 1), GRASS);
        world.set_block(BlockCoord::new(2, 0, 1), DIRT);

        assert_eq!(state.paint(&mut world).unwrap(), 1);
        assert_eq!(world.get_block(BlockCoord::new(1, 0, 1)), STONE);
        assert_eq!(world.get_block(BlockCoord::new(2, 0, 1)), DIRT);
        assert_eq!(world.get_block(BlockCoord::ZERO), BlockInfo::AIR);
    }

    #[test]
    fn test_empty_mask_paints_everything_with_hint() {
        let (mut world, mut state) = setup();
        let mask_anchor = BlockCoord::new(12, 10, 0);
        world.set_block(mask_anchor, BlockInfo::custom(state.config().roles.mask));
        state.anchors_mut().mask = Some(mask_anchor);

        assert_eq!(state.paint(&mut world).unwrap(), 9);
        assert_eq!(world.hints().len(), 1);
    }

    #[test]
    fn test_cut_and_paste_undo() {
        let (mut world, mut state) = setup();
        world.fill(region(), DIRT);

        assert_eq!(state.cut(&mut world).unwrap(), 9);
        assert!(region().cells().all(|at| world.get_block(at) == BlockInfo::AIR));
        assert_eq!(state.history().undo_len(), 1);

        let target = BlockCoord::new(-10, 0, 0);
        assert_eq!(state.paste(&mut world, target).unwrap(), 9);
        assert_eq!(world.get_block(target + BlockCoord::new(2, 0, 2)), DIRT);

        state.undo(&mut world).unwrap();
        assert_eq!(world.get_block(target), BlockInfo::AIR);
        state.undo(&mut world).unwrap();
        assert!(region().cells().all(|at| world.get_block(at) == DIRT));
    }

    #[test]
    fn test_copy_is_not_recorded() {
        let (world, mut state) = setup();
        assert_eq!(state.copy(&world).unwrap(), 9);
        assert_eq!(state.history().undo_len(), 0);
    }

    #[test]
    fn test_transforms_on_empty_clipboard() {
        let (mut world, mut state) = setup();
        assert!(matches!(state.rotate_clockwise(), Err(Error::EmptyClipboard)));
        assert!(matches!(state.mirror(Axis::Y), Err(Error::EmptyClipboard)));
        assert!(matches!(state.paste(&mut world, BlockCoord::ZERO), Err(Error::EmptyClipboard)));
        assert!(state.clipboard().is_empty());
        assert_eq!(state.history().undo_len(), 0);
    }

    #[test]
    fn test_clear_clipboard() {
        let (world, mut state) = setup();
        state.copy(&world).unwrap();
        state.clear_clipboard();
        assert!(state.clipboard().is_empty());
    }
}
