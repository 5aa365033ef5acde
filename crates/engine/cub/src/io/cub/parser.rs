//! CUB deserialization - Parse binary format to VoxelGrid

use super::reader::CubReader;
use super::{CubError, DimensionPolicy, Result};
use crate::core::{Rgb, VoxelGrid};
use tracing::{debug, warn};

/// Parse CUB binary data into a [`VoxelGrid`], rejecting cell count mismatches
///
/// # Example
///
/// ```
/// use cub::io::cub::{parse_cub, CubError};
///
/// assert!(matches!(
///     parse_cub(&[0u8; 4]),
///     Err(CubError::TruncatedHeader { .. })
/// ));
/// ```
pub fn parse_cub(data: &[u8]) -> Result<VoxelGrid> {
    parse_cub_with_policy(data, DimensionPolicy::Strict)
}

/// Parse CUB binary data, resolving cell count mismatches with `policy`
pub fn parse_cub_with_policy(data: &[u8], policy: DimensionPolicy) -> Result<VoxelGrid> {
    let reader = CubReader::new(data);
    let header = reader.read_header()?;
    let dims = header.dimensions;

    let expected = dims.cell_count().ok_or(CubError::DimensionsOverflow {
        width: dims.width,
        depth: dims.depth,
        height: dims.height,
    })?;
    let found = reader.cell_count();

    debug!(
        width = dims.width,
        depth = dims.depth,
        height = dims.height,
        cells = found,
        "decoded CUB header"
    );

    if reader.trailing_bytes() != 0 {
        debug!(
            bytes = reader.trailing_bytes(),
            "dropping trailing partial cell"
        );
    }

    if found != expected {
        match policy {
            DimensionPolicy::Strict => {
                return Err(CubError::CellCountMismatch { expected, found });
            }
            DimensionPolicy::Lenient => {
                warn!(
                    expected,
                    found, "cell count mismatch, padding or truncating to header dimensions"
                );
            }
        }
    }

    let mut cells: Vec<Rgb> = Vec::with_capacity(expected.min(found));
    cells.extend(reader.color_cells().take(expected));
    cells.resize(expected, Rgb::TRANSPARENT);

    let grid = VoxelGrid::new(dims, cells);
    debug!(solid = grid.solid_count(), "decoded CUB cells");
    Ok(grid)
}
