// Input/Output: parsing and serialization

pub mod cub;
pub mod wavefront;

// Re-export main types and functions
pub use cub::{parse_cub, parse_cub_with_policy, CubError, DimensionPolicy};
pub use wavefront::{serialize_mtl, serialize_obj, FORMAT_VERSION};
