//! Scene assembly - group voxels by color and build their cube meshes
//!
//! Points are collected by scanning the grid with `x` outermost and `z`
//! innermost. Groups are ordered by registry index. A single cube counter
//! runs across all groups in emission order, so every cube owns a distinct
//! block of 8 vertex indices in the final file-wide vertex pool.

use super::cube_mesh::{generate_cube_mesh, FACES_PER_CUBE, VERTICES_PER_CUBE};
use crate::core::Dimensions;
use glam::IVec3;
use tracing::debug;

/// All cubes sharing one registry color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectGroup {
    /// Registry index of the shared color
    pub color_index: usize,
    /// Cube anchors in scan order
    pub points: Vec<IVec3>,
    /// Concatenated cube vertices, 8 per point
    pub vertices: Vec<IVec3>,
    /// Concatenated quads, 6 per point, 1-based file-wide vertex indices
    pub faces: Vec<[usize; 4]>,
    /// Global index of this group's first cube
    pub first_cube: usize,
}

impl ObjectGroup {
    fn new(color_index: usize, points: Vec<IVec3>, first_cube: usize) -> Self {
        let mut vertices = Vec::with_capacity(points.len() * VERTICES_PER_CUBE);
        let mut faces = Vec::with_capacity(points.len() * FACES_PER_CUBE);

        for (i, &point) in points.iter().enumerate() {
            let mesh = generate_cube_mesh(point, first_cube + i);
            vertices.extend_from_slice(&mesh.vertices);
            faces.extend_from_slice(&mesh.faces);
        }

        Self {
            color_index,
            points,
            vertices,
            faces,
            first_cube,
        }
    }

    pub fn cube_count(&self) -> usize {
        self.points.len()
    }

    /// 1-based range of vertex indices owned by this group.
    pub fn vertex_range(&self) -> std::ops::RangeInclusive<usize> {
        let first = self.first_cube * VERTICES_PER_CUBE + 1;
        first..=first + self.vertices.len() - 1
    }
}

/// Geometry for a whole grid, one group per color in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pub groups: Vec<ObjectGroup>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn cube_count(&self) -> usize {
        self.groups.iter().map(ObjectGroup::cube_count).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.groups.iter().map(|g| g.vertices.len()).sum()
    }

    pub fn face_count(&self) -> usize {
        self.groups.iter().map(|g| g.faces.len()).sum()
    }
}

/// Group the non-excluded cells of a grid by color index and mesh them.
///
/// `indices` holds one entry per cell in flat order (see
/// [`Dimensions::index_of`]); `None` marks an empty cell. Entries beyond the
/// end of `indices` are treated as empty.
pub fn assemble_scene(dimensions: Dimensions, indices: &[Option<usize>]) -> Scene {
    debug_assert!(dimensions.cell_count().is_some_and(|n| n <= indices.len()));

    // A zero extent leaves no cells, however large the other two are
    if dimensions.cell_count() == Some(0) {
        return Scene::default();
    }

    let mut buckets: Vec<Vec<IVec3>> = Vec::new();

    for x in 0..dimensions.width {
        for y in 0..dimensions.depth {
            for z in 0..dimensions.height {
                let cell = dimensions.index_of(x, y, z);
                let Some(Some(color_index)) = indices.get(cell).copied() else {
                    continue;
                };
                if color_index >= buckets.len() {
                    buckets.resize_with(color_index + 1, Vec::new);
                }
                buckets[color_index].push(IVec3::new(x as i32, y as i32, z as i32));
            }
        }
    }

    let mut groups = Vec::with_capacity(buckets.len());
    let mut next_cube = 0;
    for (color_index, points) in buckets.into_iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        let group = ObjectGroup::new(color_index, points, next_cube);
        next_cube += group.cube_count();
        groups.push(group);
    }

    debug!(groups = groups.len(), cubes = next_cube, "assembled scene");

    Scene { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_voxel() {
        let scene = assemble_scene(Dimensions::new(1, 1, 1), &[Some(0)]);
        assert_eq!(scene.groups.len(), 1);

        let group = &scene.groups[0];
        assert_eq!(group.color_index, 0);
        assert_eq!(group.vertices.len(), 8);
        assert_eq!(group.faces.len(), 6);
        assert_eq!(group.vertex_range(), 1..=8);
    }

    #[test]
    fn test_empty_cells_skipped() {
        let scene = assemble_scene(Dimensions::new(2, 2, 1), &[None, None, None, None]);
        assert!(scene.is_empty());
        assert_eq!(scene.vertex_count(), 0);
    }

    #[test]
    fn test_zero_extent_with_huge_extents() {
        for dims in [
            Dimensions::new(u32::MAX, u32::MAX, 0),
            Dimensions::new(0, u32::MAX, u32::MAX),
            Dimensions::new(u32::MAX, 0, u32::MAX),
        ] {
            let scene = assemble_scene(dims, &[]);
            assert!(scene.is_empty());
            assert_eq!(scene.cube_count(), 0);
        }
    }

    #[test]
    fn test_groups_in_color_index_order() {
        // Flat order: color 0 at x=1, color 1 at x=0
        let scene = assemble_scene(Dimensions::new(2, 1, 1), &[Some(1), Some(0)]);
        let order: Vec<usize> = scene.groups.iter().map(|g| g.color_index).collect();
        assert_eq!(order, vec![0, 1]);
        assert_eq!(scene.groups[0].points, vec![IVec3::new(1, 0, 0)]);
        assert_eq!(scene.groups[1].points, vec![IVec3::new(0, 0, 0)]);
    }

    #[test]
    fn test_scan_order_x_outermost() {
        let dims = Dimensions::new(2, 2, 2);
        let indices = vec![Some(0); 8];
        let scene = assemble_scene(dims, &indices);

        let expected: Vec<IVec3> = [
            (0, 0, 0),
            (0, 0, 1),
            (0, 1, 0),
            (0, 1, 1),
            (1, 0, 0),
            (1, 0, 1),
            (1, 1, 0),
            (1, 1, 1),
        ]
        .iter()
        .map(|&(x, y, z)| IVec3::new(x, y, z))
        .collect();
        assert_eq!(scene.groups[0].points, expected);
    }

    #[test]
    fn test_cube_counter_spans_groups() {
        let dims = Dimensions::new(3, 1, 1);
        let scene = assemble_scene(dims, &[Some(0), Some(1), Some(0)]);

        assert_eq!(scene.groups[0].first_cube, 0);
        assert_eq!(scene.groups[0].vertex_range(), 1..=16);
        assert_eq!(scene.groups[1].first_cube, 2);
        assert_eq!(scene.groups[1].vertex_range(), 17..=24);
        assert_eq!(scene.groups[1].faces[0], [17, 18, 20, 19]);
    }

    #[test]
    fn test_faces_stay_inside_group_range() {
        let dims = Dimensions::new(3, 2, 2);
        let indices: Vec<Option<usize>> = (0..12)
            .map(|i| match i % 4 {
                0 => None,
                n => Some(n - 1),
            })
            .collect();
        let scene = assemble_scene(dims, &indices);

        let mut previous_max = 0;
        for group in &scene.groups {
            let range = group.vertex_range();
            assert_eq!(*range.start(), previous_max + 1);
            for face in &group.faces {
                for index in face {
                    assert!(range.contains(index));
                }
            }
            previous_max = *range.end();
        }
        assert_eq!(previous_max, scene.vertex_count());
        assert_eq!(scene.cube_count(), 9);
    }
}
