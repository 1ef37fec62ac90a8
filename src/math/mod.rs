//! Integer geometry

pub mod region;

pub use region::BlockBox;
