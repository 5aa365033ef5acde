//! Error types for file-level CUB conversion

use cub::CubError;
use std::path::PathBuf;
use thiserror::Error;

/// cub2obj error types
#[derive(Debug, Error)]
pub enum Cub2ObjError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input path is not a file: {}", .0.display())]
    InputNotAFile(PathBuf),

    #[error("Output directory is not valid: {}", .0.display())]
    InvalidOutputDir(PathBuf),

    #[error("Cannot derive a model name from: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Conversion error: {0}")]
    Convert(#[from] CubError),
}

/// Result type alias for cub2obj operations
pub type Result<T> = std::result::Result<T, Cub2ObjError>;
