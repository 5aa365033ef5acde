//! Converter configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! file is valid:
//!
//! ```toml
//! output_dir = "exports"
//! dimension_policy = "lenient"   # or "strict" (default)
//! ```

use crate::types::{Cub2ObjError, Result};
use cub::{ConvertOptions, DimensionPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by every conversion in one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cub2ObjConfig {
    /// Directory receiving `<name>.obj` and `<name>.mtl` (default: current directory)
    pub output_dir: Option<PathBuf>,
    /// Handling of payloads whose cell count disagrees with the header
    pub dimension_policy: DimensionPolicy,
}

impl Cub2ObjConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Cub2ObjError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Cub2ObjError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Output directory, falling back to the current directory
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::default().with_dimension_policy(self.dimension_policy)
    }
}
