//! CUB voxel grid to Wavefront OBJ/MTL conversion
//!
//! A CUB file is a dense grid of RGB cells. Conversion turns every
//! non-empty cell into a unit cube, groups cubes into one OBJ object per
//! distinct color, and writes a companion MTL library with one diffuse
//! material per color.
//!
//! ## Architecture
//!
//! ```text
//! io::cub       bytes → VoxelGrid
//! palette       cells → ColorRegistry + per-cell color index
//! mesh          color indices → Scene (per-color cube meshes)
//! io::wavefront Scene → OBJ text, ColorRegistry → MTL text
//! convert       the above, end to end
//! ```

pub mod convert;
pub mod core;
pub mod io;
pub mod mesh;
pub mod palette;

pub use crate::convert::{
    convert, convert_with_options, Conversion, ConversionStats, ConvertOptions,
};
pub use crate::core::{Dimensions, Rgb, VoxelGrid};
pub use io::{
    parse_cub, parse_cub_with_policy, serialize_mtl, serialize_obj, CubError, DimensionPolicy,
    FORMAT_VERSION,
};
pub use mesh::{assemble_scene, generate_cube_mesh, CubeMesh, ObjectGroup, Scene};
pub use palette::ColorRegistry;

// Re-export glam for convenience
pub use glam;
