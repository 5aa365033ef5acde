//! File-level conversion: validate paths, read the CUB file, write OBJ + MTL
//!
//! Both output texts are produced before anything is written, so a decode
//! failure never leaves a partial pair on disk.

use crate::types::{Cub2ObjError, Result};
use cub::{convert_with_options, ConversionStats, ConvertOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths written by one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub obj: PathBuf,
    pub mtl: PathBuf,
    pub stats: ConversionStats,
}

/// Check that `path` names an existing regular file
pub fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Cub2ObjError::InputNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(Cub2ObjError::InputNotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Check that `path` names an existing directory
pub fn validate_output_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(Cub2ObjError::InvalidOutputDir(path.to_path_buf()));
    }
    Ok(())
}

/// Model name derived from the input file name without its extension
///
/// ```
/// use cub2obj::convert::base_name;
/// use std::path::Path;
///
/// assert_eq!(base_name(Path::new("models/castle.cub")).unwrap(), "castle");
/// ```
pub fn base_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Cub2ObjError::InvalidFileName(path.to_path_buf()))
}

/// Convert `input` and write `<name>.obj` / `<name>.mtl` into `output_dir`
///
/// `name` defaults to the input's file stem.
pub fn convert_file(
    input: &Path,
    output_dir: &Path,
    name: Option<&str>,
    options: &ConvertOptions,
) -> Result<OutputFiles> {
    validate_input(input)?;
    validate_output_dir(output_dir)?;

    let name = match name {
        Some(name) => name.to_string(),
        None => base_name(input)?,
    };

    let data = fs::read(input).map_err(|source| Cub2ObjError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), bytes = data.len(), "read input");

    let conversion = convert_with_options(&data, &name, options)?;

    let obj = output_dir.join(format!("{}.obj", name));
    let mtl = output_dir.join(format!("{}.mtl", name));
    write_file(&obj, &conversion.obj)?;
    write_file(&mtl, &conversion.mtl)?;

    info!(
        obj = %obj.display(),
        mtl = %mtl.display(),
        objects = conversion.stats.objects,
        "conversion complete"
    );

    Ok(OutputFiles {
        obj,
        mtl,
        stats: conversion.stats,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Cub2ObjError::Io {
        path: path.to_path_buf(),
        source,
    })
}
