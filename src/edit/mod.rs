//! Region edit system.
//!
//! Paints, masks, copies, cuts and pastes boxes of blocks. Every world
//! mutation is captured as a reverse delta, enabling bounded undo/redo.

pub mod config;
pub mod mask;
pub mod transaction;
pub mod history;
pub mod clipboard;
pub mod mode;
pub mod state;
pub mod dispatch;

pub use config::{BlockRole, EditConfig, RoleIds, RoleTable, ToolKind, ToolNames};
pub use mask::Mask;
pub use transaction::RegionTransaction;
pub use history::{BoundedStack, History};
pub use clipboard::{Axis, Clipboard, Extents};
pub use mode::{Mode, WandState};
pub use state::{Anchors, EditState};
pub use dispatch::{Action, HostEvent};
