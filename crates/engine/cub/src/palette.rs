//! Color deduplication
//!
//! Collapses the per-cell colors of a grid into an ordered registry of
//! distinct non-transparent colors. Registry indices are assigned in order of
//! first appearance over the flat cell sequence and name both the geometry
//! object and the material emitted for that color.

use crate::core::Rgb;
use std::collections::HashMap;

/// Ordered set of distinct non-transparent colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRegistry {
    colors: Vec<Rgb>,
    lookup: HashMap<Rgb, usize>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deduplicate `cells`, returning the registry and one entry per cell.
    ///
    /// Each entry is the registry index of the cell's color, or `None` for
    /// transparent cells.
    pub fn from_cells(cells: &[Rgb]) -> (Self, Vec<Option<usize>>) {
        let mut registry = Self::new();
        let indices = cells.iter().map(|&c| registry.insert(c)).collect();
        (registry, indices)
    }

    /// Register `color` if unseen and return its index, `None` if transparent.
    pub fn insert(&mut self, color: Rgb) -> Option<usize> {
        if color.is_transparent() {
            return None;
        }
        let next = self.colors.len();
        let index = *self.lookup.entry(color).or_insert(next);
        if index == next {
            self.colors.push(color);
        }
        Some(index)
    }

    /// Colors in registry order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Rgb)> + '_ {
        self.colors.iter().copied().enumerate()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
