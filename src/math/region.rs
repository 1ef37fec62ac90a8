//! Integer axis-aligned block box

use crate::core::types::{BlockCoord, I64Vec3};

/// Axis-aligned box of blocks, inclusive of both corners
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockBox {
    pub min: BlockCoord,
    pub max: BlockCoord,
}

impl BlockBox {
    /// Create a box from two arbitrary corners.
    ///
    /// Either corner may come first; the result holds the element-wise
    /// minimum and maximum.
    pub fn from_corners(a: BlockCoord, b: BlockCoord) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box covering exactly one cell
    pub fn single(at: BlockCoord) -> Self {
        Self { min: at, max: at }
    }

    /// Distance between the corners on each axis (0 for a single cell)
    pub fn extents(&self) -> I64Vec3 {
        self.max - self.min
    }

    /// Number of cells along each axis
    pub fn size(&self) -> I64Vec3 {
        self.extents() + I64Vec3::ONE
    }

    /// Total number of cells in the box, saturating at `u64::MAX`
    pub fn cell_count(&self) -> u64 {
        let axis = |min: i64, max: i64| max.abs_diff(min).saturating_add(1);
        axis(self.min.x, self.max.x)
            .saturating_mul(axis(self.min.y, self.max.y))
            .saturating_mul(axis(self.min.z, self.max.z))
    }

    /// Check if a cell lies inside the box
    pub fn contains(&self, p: BlockCoord) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Expand box to include a cell
    pub fn expand(&mut self, point: BlockCoord) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Visit every cell exactly once, z outermost then y then x.
    pub fn cells(&self) -> impl Iterator<Item = BlockCoord> + use<> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| {
            (min.y..=max.y).flat_map(move |y| {
                (min.x..=max.x).map(move |x| BlockCoord::new(x, y, z))
            })
        })
    }
}
