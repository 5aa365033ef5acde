//! cub2obj - CUB voxel grid to Wavefront OBJ/MTL converter
//!
//! File-level wrapper around the [`cub`] crate: validates the input file and
//! output directory, derives the model name from the input file, and writes
//! the geometry and material library side by side.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cub2obj::convert::convert_file;
//! use cub::ConvertOptions;
//! use std::path::Path;
//!
//! let written = convert_file(
//!     Path::new("castle.cub"),
//!     Path::new("exports"),
//!     None,
//!     &ConvertOptions::default(),
//! )?;
//! println!("wrote {} and {}", written.obj.display(), written.mtl.display());
//! # Ok::<(), cub2obj::Cub2ObjError>(())
//! ```

pub mod config;
pub mod convert;
pub mod types;

// Re-export main types for convenience
pub use config::Cub2ObjConfig;
pub use convert::{base_name, convert_file, validate_input, validate_output_dir, OutputFiles};
pub use types::{Cub2ObjError, Result};
