//! Blockpaint - region block editing for voxel worlds

pub mod core;
pub mod math;
pub mod voxel;
pub mod edit;
