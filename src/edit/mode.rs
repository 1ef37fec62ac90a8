//! Wand modes.

use crate::voxel::block::BlockInfo;

/// How a tool hit on an arbitrary block is interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    None,
    /// Pickaxe and axe hits set the selection markers
    Selecting,
    /// Arrow hits pick the exchange target; pickaxe and axe hits place it
    Exchanging,
}

/// Current wand mode plus the exchange target it places
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WandState {
    mode: Mode,
    exchange_target: BlockInfo,
}

impl Default for WandState {
    fn default() -> Self {
        Self {
            mode: Mode::None,
            exchange_target: BlockInfo::AIR,
        }
    }
}

impl WandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Toggle the selection wand. Enabling it disables the exchange wand.
    pub fn toggle_selection(&mut self) -> bool {
        self.mode = match self.mode {
            Mode::Selecting => Mode::None,
            _ => Mode::Selecting,
        };
        self.mode == Mode::Selecting
    }

    /// Toggle the exchange wand. Enabling it disables the selection wand.
    pub fn toggle_exchange(&mut self) -> bool {
        self.mode = match self.mode {
            Mode::Exchanging => Mode::None,
            _ => Mode::Exchanging,
        };
        self.mode == Mode::Exchanging
    }

    /// Block the exchange wand places
    pub fn exchange_target(&self) -> BlockInfo {
        self.exchange_target
    }

    pub fn set_exchange_target(&mut self, block: BlockInfo) {
        self.exchange_target = block;
    }
}
