//! Editor configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::voxel::block::CustomBlockId;

/// What a mod control block does when hit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockRole {
    Paint,
    Undo,
    Redo,
    Marker1,
    Marker2,
    Mask,
    AirFilter,
    ToggleSelection,
    ToggleExchange,
    Copy,
    Cut,
    Paste,
    RotateClockwise,
    RotateCounterClockwise,
    MirrorX,
    MirrorY,
    MirrorZ,
    ClearClipboard,
}

/// Tools the host reports hits with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    /// Triggers control blocks
    Stick,
    /// Pastes, and captures the exchange target
    Arrow,
    /// Selection marker 1, exchange placement
    Pickaxe,
    /// Selection marker 2, exchange placement
    Axe,
}

/// Custom block ids of the control blocks
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleIds {
    pub paint: CustomBlockId,
    pub undo: CustomBlockId,
    pub redo: CustomBlockId,
    pub marker1: CustomBlockId,
    pub marker2: CustomBlockId,
    pub mask: CustomBlockId,
    pub air_filter: CustomBlockId,
    pub toggle_selection: CustomBlockId,
    pub toggle_exchange: CustomBlockId,
    pub copy: CustomBlockId,
    pub cut: CustomBlockId,
    pub paste: CustomBlockId,
    pub rotate_clockwise: CustomBlockId,
    pub rotate_counter_clockwise: CustomBlockId,
    pub mirror_x: CustomBlockId,
    pub mirror_y: CustomBlockId,
    pub mirror_z: CustomBlockId,
    pub clear_clipboard: CustomBlockId,
}

impl Default for RoleIds {
    fn default() -> Self {
        Self {
            paint: 3022,
            undo: 3023,
            marker1: 3024,
            marker2: 3025,
            mask: 3026,
            air_filter: 3027,
            toggle_selection: 3028,
            copy: 3029,
            cut: 3030,
            paste: 3031,
            rotate_clockwise: 3032,
            redo: 3033,
            rotate_counter_clockwise: 3034,
            // 3035 is the palette block, owned by the host
            toggle_exchange: 3036,
            mirror_x: 3037,
            mirror_y: 3038,
            mirror_z: 3039,
            clear_clipboard: 3040,
        }
    }
}

impl RoleIds {
    /// Every (role, id) pair
    pub fn entries(&self) -> [(BlockRole, CustomBlockId); 18] {
        [
            (BlockRole::Paint, self.paint),
            (BlockRole::Undo, self.undo),
            (BlockRole::Redo, self.redo),
            (BlockRole::Marker1, self.marker1),
            (BlockRole::Marker2, self.marker2),
            (BlockRole::Mask, self.mask),
            (BlockRole::AirFilter, self.air_filter),
            (BlockRole::ToggleSelection, self.toggle_selection),
            (BlockRole::ToggleExchange, self.toggle_exchange),
            (BlockRole::Copy, self.copy),
            (BlockRole::Cut, self.cut),
            (BlockRole::Paste, self.paste),
            (BlockRole::RotateClockwise, self.rotate_clockwise),
            (BlockRole::RotateCounterClockwise, self.rotate_counter_clockwise),
            (BlockRole::MirrorX, self.mirror_x),
            (BlockRole::MirrorY, self.mirror_y),
            (BlockRole::MirrorZ, self.mirror_z),
            (BlockRole::ClearClipboard, self.clear_clipboard),
        ]
    }
}

/// Host tool names for each tool kind
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolNames {
    pub stick: String,
    pub arrow: String,
    pub pickaxe: String,
    pub axe: String,
}

impl Default for ToolNames {
    fn default() -> Self {
        Self {
            stick: "T_Stick".to_string(),
            arrow: "T_Arrow".to_string(),
            pickaxe: "T_Pickaxe_Stone".to_string(),
            axe: "T_Axe_Stone".to_string(),
        }
    }
}

impl ToolNames {
    /// Resolve a host tool name
    pub fn kind_of(&self, name: &str) -> Option<ToolKind> {
        if name == self.stick {
            Some(ToolKind::Stick)
        } else if name == self.arrow {
            Some(ToolKind::Arrow)
        } else if name == self.pickaxe {
            Some(ToolKind::Pickaxe)
        } else if name == self.axe {
            Some(ToolKind::Axe)
        } else {
            None
        }
    }
}

/// Configuration for the block editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Maximum entries in each of the undo and redo stacks.
    pub history_capacity: usize,
    /// Drop the redo stack whenever a fresh edit is recorded.
    pub clear_redo_on_edit: bool,
    /// Largest box (in cells) a single paint, copy or cut may cover.
    pub max_region_cells: u64,
    /// Control block ids.
    pub roles: RoleIds,
    /// Host tool names.
    pub tools: ToolNames,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            history_capacity: 5,
            clear_redo_on_edit: false,
            max_region_cells: 1 << 20,
            roles: RoleIds::default(),
            tools: ToolNames::default(),
        }
    }
}

impl EditConfig {
    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(Error::Config("history_capacity must be at least 1".to_string()));
        }
        if self.max_region_cells == 0 {
            return Err(Error::Config("max_region_cells must be at least 1".to_string()));
        }
        let entries = self.roles.entries();
        let table = RoleTable::new(&self.roles);
        if table.len() != entries.len() {
            return Err(Error::Config("control block ids must be distinct".to_string()));
        }
        Ok(())
    }

    /// Save config to a JSON file.
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate config from a JSON file. Missing fields take defaults.
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: EditConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Reverse lookup from custom block id to role
#[derive(Clone, Debug, Default)]
pub struct RoleTable {
    roles: HashMap<CustomBlockId, BlockRole>,
}

impl RoleTable {
    pub fn new(ids: &RoleIds) -> Self {
        Self {
            roles: ids.entries().into_iter().map(|(role, id)| (id, role)).collect(),
        }
    }

    /// Role of a custom block, if it is one of ours
    pub fn role_of(&self, id: CustomBlockId) -> Option<BlockRole> {
        self.roles.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
