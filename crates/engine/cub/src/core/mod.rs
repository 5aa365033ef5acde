// Core grid data structures

pub mod color;
pub mod grid;

// Re-export main types
pub use color::Rgb;
pub use grid::{Dimensions, VoxelGrid};
