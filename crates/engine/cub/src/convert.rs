//! CUB to OBJ/MTL conversion
//!
//! Runs the whole pipeline over an in-memory buffer:
//!
//! ```text
//! bytes ─ parse_cub ─▶ VoxelGrid ─ ColorRegistry::from_cells ─▶ (registry, indices)
//!                                                                   │          │
//!                                             serialize_mtl ◀───────┘          │
//!                                     serialize_obj ◀─ assemble_scene ◀────────┘
//! ```
//!
//! Nothing touches the filesystem; callers supply the bytes and a base name
//! and receive both output texts.

use crate::io::cub::{parse_cub_with_policy, DimensionPolicy, Result};
use crate::io::wavefront::{serialize_mtl, serialize_obj};
use crate::mesh::assemble_scene;
use crate::palette::ColorRegistry;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Conversion settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub dimension_policy: DimensionPolicy,
}

impl ConvertOptions {
    pub fn with_dimension_policy(mut self, policy: DimensionPolicy) -> Self {
        self.dimension_policy = policy;
        self
    }
}

/// Counts describing one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub cells: usize,
    pub solid_voxels: usize,
    pub unique_colors: usize,
    pub objects: usize,
    pub vertices: usize,
    pub faces: usize,
}

/// Output of a conversion: the geometry file, its material library and stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub obj: String,
    pub mtl: String,
    pub stats: ConversionStats,
}

/// Convert CUB bytes to OBJ and MTL text using the default (strict) options
///
/// # Example
///
/// ```
/// use cub::convert;
///
/// let mut data = Vec::new();
/// for extent in [1u32, 1, 1] {
///     data.extend_from_slice(&extent.to_le_bytes());
/// }
/// data.extend_from_slice(&[255, 0, 0]);
///
/// let out = convert(&data, "box").unwrap();
/// assert!(out.obj.contains("mtllib box.mtl"));
/// assert!(out.mtl.contains("Kd 1.000000 0 0"));
/// ```
pub fn convert(data: &[u8], name: &str) -> Result<Conversion> {
    convert_with_options(data, name, &ConvertOptions::default())
}

/// Convert CUB bytes to OBJ and MTL text
pub fn convert_with_options(
    data: &[u8],
    name: &str,
    options: &ConvertOptions,
) -> Result<Conversion> {
    let grid = parse_cub_with_policy(data, options.dimension_policy)?;
    let (registry, indices) = ColorRegistry::from_cells(&grid.cells);

    debug!(
        cells = grid.cells.len(),
        colors = registry.len(),
        "built color registry"
    );

    let scene = assemble_scene(grid.dimensions, &indices);

    let stats = ConversionStats {
        cells: grid.cells.len(),
        solid_voxels: scene.cube_count(),
        unique_colors: registry.len(),
        objects: scene.groups.len(),
        vertices: scene.vertex_count(),
        faces: scene.face_count(),
    };

    Ok(Conversion {
        obj: serialize_obj(&scene, name),
        mtl: serialize_mtl(&registry, name),
        stats,
    })
}
