//! Host event entry points.
//!
//! The host reports block placements, destructions and tool hits. Control
//! block ids resolve to a [`BlockRole`], tool names to a [`ToolKind`], and the
//! pair looks up an [`Action`] in a fixed table.

use serde::{Deserialize, Serialize};

use crate::core::types::{BlockCoord, Result, UP};
use crate::voxel::block::{BlockInfo, CustomBlockId};
use crate::voxel::store::HostWorld;
use super::clipboard::Axis;
use super::config::{BlockRole, ToolKind};
use super::mode::Mode;
use super::state::EditState;

/// Editor operation triggered by hitting a control block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Paint,
    Undo,
    Redo,
    Copy,
    Cut,
    Paste,
    RotateClockwise,
    RotateCounterClockwise,
    Mirror(Axis),
    ClearClipboard,
    ToggleSelection,
    ToggleExchange,
}

const ACTIONS: &[(BlockRole, ToolKind, Action)] = &[
    (BlockRole::Paint, ToolKind::Stick, Action::Paint),
    (BlockRole::Undo, ToolKind::Stick, Action::Undo),
    (BlockRole::Redo, ToolKind::Stick, Action::Redo),
    (BlockRole::Copy, ToolKind::Stick, Action::Copy),
    (BlockRole::Cut, ToolKind::Stick, Action::Cut),
    (BlockRole::Paste, ToolKind::Stick, Action::Paste),
    (BlockRole::Paste, ToolKind::Arrow, Action::Paste),
    (BlockRole::RotateClockwise, ToolKind::Stick, Action::RotateClockwise),
    (BlockRole::RotateCounterClockwise, ToolKind::Stick, Action::RotateCounterClockwise),
    (BlockRole::MirrorX, ToolKind::Stick, Action::Mirror(Axis::X)),
    (BlockRole::MirrorY, ToolKind::Stick, Action::Mirror(Axis::Y)),
    (BlockRole::MirrorZ, ToolKind::Stick, Action::Mirror(Axis::Z)),
    (BlockRole::ClearClipboard, ToolKind::Stick, Action::ClearClipboard),
    (BlockRole::ToggleSelection, ToolKind::Stick, Action::ToggleSelection),
    (BlockRole::ToggleExchange, ToolKind::Stick, Action::ToggleExchange),
];

/// Look up the action for a control block hit
pub fn action_for(role: BlockRole, tool: ToolKind) -> Option<Action> {
    ACTIONS
        .iter()
        .find(|(r, t, _)| *r == role && *t == tool)
        .map(|(_, _, action)| *action)
}

/// A host callback, in a form that can be queued or replayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "params")]
pub enum HostEvent {
    BlockPlaced { at: BlockCoord, id: CustomBlockId },
    BlockDestroyed { at: BlockCoord, id: CustomBlockId },
    ToolHit { at: BlockCoord, id: CustomBlockId, tool: String },
    AnyBlockToolHit { at: BlockCoord, block: BlockInfo, tool: String },
}

impl EditState {
    /// Route a queued host event
    pub fn handle_event(&mut self, world: &mut impl HostWorld, event: &HostEvent) {
        match event {
            HostEvent::BlockPlaced { at, id } => self.on_block_placed(*at, *id),
            HostEvent::BlockDestroyed { at, id } => self.on_block_destroyed(*at, *id),
            HostEvent::ToolHit { at, id, tool } => {
                self.on_tool_hit(world, *at, *id, tool);
            }
            HostEvent::AnyBlockToolHit { at, block, tool } => {
                self.on_any_block_tool_hit(world, *at, *block, tool);
            }
        }
    }

    /// A mod block was placed: anchor blocks record their position.
    pub fn on_block_placed(&mut self, at: BlockCoord, id: CustomBlockId) {
        let role = self.roles().role_of(id);
        let anchors = self.anchors_mut();
        match role {
            Some(BlockRole::Marker1) => anchors.marker1 = Some(at),
            Some(BlockRole::Marker2) => anchors.marker2 = Some(at),
            Some(BlockRole::Mask) => anchors.mask = Some(at),
            Some(BlockRole::Paint) => anchors.paint = Some(at),
            _ => return,
        }
        log::debug!("anchor block {} placed at {}", id, at);
    }

    /// A mod block was destroyed: a removed mask or paint block drops its anchor.
    pub fn on_block_destroyed(&mut self, at: BlockCoord, id: CustomBlockId) {
        let role = self.roles().role_of(id);
        let anchors = self.anchors_mut();
        let anchor = match role {
            Some(BlockRole::Mask) => &mut anchors.mask,
            Some(BlockRole::Paint) => &mut anchors.paint,
            _ => return,
        };
        if *anchor == Some(at) {
            *anchor = None;
            log::debug!("anchor block {} removed from {}", id, at);
        }
    }

    /// A tool hit a mod block. Returns the action that ran, if any.
    pub fn on_tool_hit(
        &mut self,
        world: &mut impl HostWorld,
        at: BlockCoord,
        id: CustomBlockId,
        tool_name: &str,
    ) -> Option<Action> {
        let role = self.roles().role_of(id)?;
        let tool = self.config().tools.kind_of(tool_name)?;
        let action = action_for(role, tool)?;

        match self.run_action(world, action, at) {
            Ok(hint) => world.spawn_hint_text(at + UP, &hint),
            Err(e) if e.is_silent() => log::debug!("{:?} skipped: {}", action, e),
            Err(e) => {
                log::info!("{:?} failed: {}", action, e);
                let player = world.player_location();
                world.spawn_hint_text(player, &e.to_string());
            }
        }
        Some(action)
    }

    /// Run an action triggered at `at`, returning the hint to show.
    pub fn run_action(&mut self, world: &mut impl HostWorld, action: Action, at: BlockCoord) -> Result<String> {
        let hint = match action {
            Action::Paint => {
                self.paint(world)?;
                "Painting Area.".to_string()
            }
            Action::Undo => {
                self.undo(world)?;
                "Undoing Last Operation.".to_string()
            }
            Action::Redo => {
                self.redo(world)?;
                "Redoing Last Operation.".to_string()
            }
            Action::Copy => {
                self.copy(&*world)?;
                "Copying Selected Region.".to_string()
            }
            Action::Cut => {
                self.cut(world)?;
                "Cutting Selected Region.".to_string()
            }
            Action::Paste => {
                self.paste(world, at)?;
                "Pasting Clipboard.".to_string()
            }
            Action::RotateClockwise => {
                self.rotate_clockwise()?;
                "Rotating Clipboard 90 degrees clockwise.".to_string()
            }
            Action::RotateCounterClockwise => {
                self.rotate_counter_clockwise()?;
                "Rotating Clipboard 90 degrees counterclockwise.".to_string()
            }
            Action::Mirror(axis) => {
                self.mirror(axis)?;
                format!("Mirroring Clipboard along {:?}.", axis)
            }
            Action::ClearClipboard => {
                self.clear_clipboard();
                "Clipboard Cleared.".to_string()
            }
            Action::ToggleSelection => {
                let text = if self.wand_mut().toggle_selection() {
                    "Selection Wand Enabled"
                } else {
                    "Selection Wand Disabled"
                };
                text.to_string()
            }
            Action::ToggleExchange => {
                let text = if self.wand_mut().toggle_exchange() {
                    "Exchanging Wand Enabled"
                } else {
                    "Exchanging Wand Disabled"
                };
                text.to_string()
            }
        };
        Ok(hint)
    }

    /// A tool hit any block. Drives the selection and exchange wands.
    ///
    /// Exchange placements write straight to the world and are not recorded
    /// in history.
    pub fn on_any_block_tool_hit(
        &mut self,
        world: &mut impl HostWorld,
        at: BlockCoord,
        block: BlockInfo,
        tool_name: &str,
    ) {
        let Some(tool) = self.config().tools.kind_of(tool_name) else {
            return;
        };

        match (self.wand().mode(), tool) {
            (Mode::Exchanging, ToolKind::Arrow) => {
                self.wand_mut().set_exchange_target(block);
                log::debug!("exchange target set to {:?}", block);
            }
            (Mode::Exchanging, ToolKind::Pickaxe | ToolKind::Axe) => {
                let target = self.wand().exchange_target();
                if !world.set_block(at, target) {
                    log::warn!("exchange at {} rejected by world", at);
                }
            }
            (Mode::Selecting, ToolKind::Pickaxe) => {
                self.anchors_mut().marker1 = Some(at);
                world.spawn_hint_text(at + UP, "Marker 1 set!");
            }
            (Mode::Selecting, ToolKind::Axe) => {
                self.anchors_mut().marker2 = Some(at);
                world.spawn_hint_text(at + UP, "Marker 2 set!");
            }
            _ => {}
        }
    }
}
