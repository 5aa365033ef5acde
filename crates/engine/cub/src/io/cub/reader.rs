//! Bounds-checked CUB binary reader
//!
//! Borrows the input buffer and never allocates; decoding into an owned
//! [`VoxelGrid`](crate::core::VoxelGrid) happens in the parser.

use super::constants::*;
use super::CubError;
use crate::core::{Dimensions, Rgb};

/// CUB file header (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubHeader {
    pub dimensions: Dimensions,
}

/// Zero-allocation CUB binary reader
pub struct CubReader<'a> {
    data: &'a [u8],
}

impl<'a> CubReader<'a> {
    /// Create a new reader for CUB binary data
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Read 4-byte little-endian unsigned integer
    #[inline]
    pub fn read_u32_le(&self, offset: usize) -> Result<u32, CubError> {
        let end = offset.saturating_add(4);
        let bytes = self
            .data
            .get(offset..end)
            .ok_or(CubError::TruncatedHeader {
                expected_bytes: end,
                available_bytes: self.data.len(),
            })?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read and parse CUB header (12 bytes)
    pub fn read_header(&self) -> Result<CubHeader, CubError> {
        if self.data.len() < HEADER_SIZE {
            return Err(CubError::TruncatedHeader {
                expected_bytes: HEADER_SIZE,
                available_bytes: self.data.len(),
            });
        }

        let width = self.read_u32_le(WIDTH_OFFSET)?;
        let depth = self.read_u32_le(DEPTH_OFFSET)?;
        let height = self.read_u32_le(HEIGHT_OFFSET)?;

        Ok(CubHeader {
            dimensions: Dimensions::new(width, depth, height),
        })
    }

    /// Bytes after the header, empty if the header itself is incomplete
    #[inline]
    pub fn payload(&self) -> &'a [u8] {
        self.data.get(HEADER_SIZE..).unwrap_or(&[])
    }

    /// Number of complete 3-byte cells in the payload
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.payload().len() / CELL_SIZE
    }

    /// Leftover bytes (0-2) after the last complete cell
    #[inline]
    pub fn trailing_bytes(&self) -> usize {
        self.payload().len() % CELL_SIZE
    }

    /// Iterate complete cells in file order; a trailing partial cell is skipped.
    pub fn color_cells(&self) -> impl Iterator<Item = Rgb> + 'a {
        self.payload()
            .chunks_exact(CELL_SIZE)
            .map(|c| Rgb::from_bytes([c[0], c[1], c[2]]))
    }

    /// Get data length
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if data is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
