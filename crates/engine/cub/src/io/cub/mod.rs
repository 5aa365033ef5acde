//! CUB voxel grid format - dense binary grid of RGB cells
//!
//! A CUB file is an uncompressed dump of a rectangular voxel grid.
//!
//! # File Format
//!
//! ```text
//! [Header: 12 bytes]
//!   Width:  u32 little-endian (X extent)
//!   Depth:  u32 little-endian (Y extent)
//!   Height: u32 little-endian (Z extent)
//!
//! [Cells: width * depth * height * 3 bytes]
//!   R, G, B per cell, x fastest, then y, then z
//! ```
//!
//! A cell of `(0, 0, 0)` is empty.
//!
//! # Example
//!
//! ```
//! use cub::io::cub::parse_cub;
//!
//! let mut data = Vec::new();
//! for extent in [1u32, 1, 1] {
//!     data.extend_from_slice(&extent.to_le_bytes());
//! }
//! data.extend_from_slice(&[255, 0, 0]);
//!
//! let grid = parse_cub(&data).unwrap();
//! assert_eq!(grid.cells.len(), 1);
//! ```

pub mod parser;
pub mod reader;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// CUB decoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubError {
    /// Fewer than 12 bytes, so the dimensions cannot be read
    #[error("Truncated header: expected {expected_bytes} bytes, only {available_bytes} available")]
    TruncatedHeader {
        expected_bytes: usize,
        available_bytes: usize,
    },

    /// `width * depth * height` does not fit in memory addressing
    #[error("Grid dimensions {width}x{depth}x{height} overflow the addressable cell count")]
    DimensionsOverflow { width: u32, depth: u32, height: u32 },

    /// Declared cell count differs from the decoded payload (strict policy only)
    #[error("Cell count mismatch: header declares {expected} cells, payload holds {found}")]
    CellCountMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, CubError>;

/// How to treat a payload whose cell count disagrees with the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionPolicy {
    /// Reject the file with [`CubError::CellCountMismatch`].
    #[default]
    Strict,
    /// Ignore surplus cells and read missing cells as empty.
    Lenient,
}

/// CUB file format constants
pub mod constants {
    /// Header size in bytes (three u32 extents)
    pub const HEADER_SIZE: usize = 12;

    /// Bytes per cell (R, G, B)
    pub const CELL_SIZE: usize = 3;

    pub const WIDTH_OFFSET: usize = 0;
    pub const DEPTH_OFFSET: usize = 4;
    pub const HEIGHT_OFFSET: usize = 8;
}

// Re-export public API
pub use parser::{parse_cub, parse_cub_with_policy};
pub use reader::{CubHeader, CubReader};
