//! VoxelGrid - a dense, row-major grid of colored cells
//!
//! Cells are stored flat with `x` varying fastest, then `y`, then `z`:
//!
//! ```text
//! index = x + width * (y + depth * z)
//! ```

use super::color::Rgb;

/// Grid extents as declared in a CUB header.
///
/// `depth` is the extent along Y and `height` the extent along Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: u32,
    pub depth: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, depth: u32, height: u32) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Number of cells declared by the extents, or `None` if it overflows `usize`.
    pub fn cell_count(&self) -> Option<usize> {
        let count = (self.width as u64)
            .checked_mul(self.depth as u64)?
            .checked_mul(self.height as u64)?;
        usize::try_from(count).ok()
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32, z: u32) -> bool {
        x < self.width && y < self.depth && z < self.height
    }

    /// Flat cell index for `(x, y, z)`. The caller keeps the coordinate in bounds.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32, z: u32) -> usize {
        let (w, d) = (self.width as usize, self.depth as usize);
        x as usize + w * (y as usize + d * z as usize)
    }
}

/// Decoded CUB contents: extents plus one color per cell.
///
/// Invariant: `cells.len() == dimensions.cell_count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    pub dimensions: Dimensions,
    pub cells: Vec<Rgb>,
}

impl VoxelGrid {
    pub fn new(dimensions: Dimensions, cells: Vec<Rgb>) -> Self {
        debug_assert_eq!(Some(cells.len()), dimensions.cell_count());
        Self { dimensions, cells }
    }

    /// Color at `(x, y, z)`, `None` outside the grid.
    pub fn cell(&self, x: u32, y: u32, z: u32) -> Option<Rgb> {
        if !self.dimensions.contains(x, y, z) {
            return None;
        }
        self.cells.get(self.dimensions.index_of(x, y, z)).copied()
    }

    /// Number of cells that are not the transparent sentinel.
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_transparent()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
