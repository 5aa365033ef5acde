// Mesh generation and scene grouping

pub mod cube_mesh;
pub mod scene;

// Re-export main types
pub use cube_mesh::{
    generate_cube_mesh, CubeMesh, CUBE_CORNERS, CUBE_FACES, FACES_PER_CUBE, VERTICES_PER_CUBE,
};
pub use scene::{assemble_scene, ObjectGroup, Scene};
