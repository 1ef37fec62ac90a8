//! Block data and the host world seam

pub mod block;
pub mod store;
pub mod memory;

pub use block::{BlockInfo, BlockKind, CustomBlockId, PlacedBlock};
pub use store::{BlockStore, HostWorld};
pub use memory::{HintRecord, MemoryWorld};
