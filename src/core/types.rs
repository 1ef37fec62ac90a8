//! Core type aliases and re-exports

pub use glam::I64Vec3;

/// Integer block coordinate. X and Y are horizontal, Z is vertical.
pub type BlockCoord = I64Vec3;

/// Lowest vertical block coordinate a host world can address
pub const MIN_Z: i64 = i16::MIN as i64;

/// Highest vertical block coordinate a host world can address
pub const MAX_Z: i64 = i16::MAX as i64;

/// One cell up
pub const UP: BlockCoord = I64Vec3::Z;

/// Standard Result type for the engine
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
