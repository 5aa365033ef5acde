//! Wavefront OBJ/MTL text output
//!
//! A converted grid becomes a geometry file with one object per color and a
//! material library with one material per color. Both share the same naming
//! scheme so `usemtl` lines resolve against the companion `.mtl`:
//!
//! ```text
//! <name>-obj-<color index>   object
//! <name>-mat-<color index>   material
//! ```

pub mod geometry;
pub mod material;

/// Version printed in the header comment of both files
pub const FORMAT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header comment shared by both output files
pub fn header_comment() -> String {
    format!("# CUB to OBJ v{}", FORMAT_VERSION)
}

pub fn object_name(name: &str, color_index: usize) -> String {
    format!("{}-obj-{}", name, color_index)
}

pub fn material_name(name: &str, color_index: usize) -> String {
    format!("{}-mat-{}", name, color_index)
}

// Re-export public API
pub use geometry::serialize_obj;
pub use material::{format_component, serialize_mtl};
