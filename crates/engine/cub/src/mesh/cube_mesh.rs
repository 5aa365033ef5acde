//! Unit cube mesh generation
//!
//! Every voxel becomes a full cube: 8 corner vertices and 6 quads. Faces
//! between neighbouring solid voxels are kept.

use glam::IVec3;

/// Corner offsets in local vertex order (local index = position + 1).
pub const CUBE_CORNERS: [IVec3; 8] = [
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(1, 1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(1, 0, 1),
    IVec3::new(0, 1, 1),
    IVec3::new(1, 1, 1),
];

/// Quad windings over 1-based local corner indices.
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [1, 2, 4, 3], // -Z
    [3, 4, 8, 7], // +Y
    [7, 8, 6, 5], // +Z
    [5, 6, 2, 1], // -Y
    [3, 7, 5, 1], // -X
    [8, 4, 2, 6], // +X
];

pub const VERTICES_PER_CUBE: usize = CUBE_CORNERS.len();
pub const FACES_PER_CUBE: usize = CUBE_FACES.len();

/// Geometry of one unit cube.
///
/// `faces` hold 1-based indices into a vertex pool where this cube's
/// vertices start at `cube_index * 8 + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeMesh {
    pub vertices: [IVec3; VERTICES_PER_CUBE],
    pub faces: [[usize; 4]; FACES_PER_CUBE],
}

/// Build the cube anchored at `point` (its minimum corner).
///
/// # Example
///
/// ```
/// use cub::mesh::generate_cube_mesh;
/// use cub::glam::IVec3;
///
/// let mesh = generate_cube_mesh(IVec3::new(2, 0, 0), 1);
/// assert_eq!(mesh.vertices[7], IVec3::new(3, 1, 1));
/// assert_eq!(mesh.faces[0], [9, 10, 12, 11]);
/// ```
pub fn generate_cube_mesh(point: IVec3, cube_index: usize) -> CubeMesh {
    let base = cube_index * VERTICES_PER_CUBE;
    CubeMesh {
        vertices: CUBE_CORNERS.map(|corner| point + corner),
        faces: CUBE_FACES.map(|face| face.map(|local| local + base)),
    }
}
