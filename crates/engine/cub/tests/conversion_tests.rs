//! End-to-end tests for the CUB to OBJ/MTL pipeline
//!
//! These tests drive `convert` with hand-built CUB buffers and inspect the
//! emitted text line by line.

use cub::{convert, CubError, FORMAT_VERSION};

fn cub_bytes(width: u32, depth: u32, height: u32, cells: &[[u8; 3]]) -> Vec<u8> {
    let mut data = Vec::new();
    for extent in [width, depth, height] {
        data.extend_from_slice(&extent.to_le_bytes());
    }
    for cell in cells {
        data.extend_from_slice(cell);
    }
    data
}

/// Object blocks of an OBJ file: (name, vertex lines, face index lists)
fn parse_objects(obj: &str) -> Vec<(String, Vec<[i64; 3]>, Vec<Vec<usize>>)> {
    let mut objects: Vec<(String, Vec<[i64; 3]>, Vec<Vec<usize>>)> = Vec::new();
    for line in obj.lines() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("o") => objects.push((parts.next().unwrap().to_string(), vec![], vec![])),
            Some("v") => {
                let coords: Vec<i64> = parts.map(|p| p.parse().unwrap()).collect();
                objects.last_mut().unwrap().1.push([coords[0], coords[1], coords[2]]);
            }
            Some("f") => {
                let face = parts.map(|p| p.parse().unwrap()).collect();
                objects.last_mut().unwrap().2.push(face);
            }
            _ => {}
        }
    }
    objects
}

fn header(obj: &str) -> Vec<&str> {
    obj.lines().take(2).collect()
}

#[test]
fn test_single_red_voxel() {
    let data = cub_bytes(1, 1, 1, &[[255, 0, 0]]);
    let out = convert(&data, "red").unwrap();

    assert_eq!(
        header(&out.obj),
        vec![format!("# CUB to OBJ v{}", FORMAT_VERSION), "mtllib red.mtl".to_string()]
    );

    let objects = parse_objects(&out.obj);
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].0, "red-obj-0");
    assert_eq!(objects[0].1.len(), 8);
    assert_eq!(objects[0].2.len(), 6);
    assert!(out.obj.contains("usemtl red-mat-0\ns off\n"));

    assert_eq!(out.mtl.matches("newmtl").count(), 1);
    assert!(out.mtl.contains("newmtl red-mat-0\nKd 1.000000 0 0\n"));
}

#[test]
fn test_adjacent_same_color_share_object() {
    let data = cub_bytes(2, 1, 1, &[[10, 20, 30], [10, 20, 30]]);
    let out = convert(&data, "pair").unwrap();

    let objects = parse_objects(&out.obj);
    assert_eq!(objects.len(), 1);

    let (_, vertices, faces) = &objects[0];
    assert_eq!(vertices.len(), 16);
    assert_eq!(faces.len(), 12);

    for i in 0..6 {
        let second: Vec<usize> = faces[i].iter().map(|v| v + 8).collect();
        assert_eq!(faces[i + 6], second);
    }

    // No face culling between the touching cubes
    assert_eq!(vertices[1], [1, 0, 0]);
    assert_eq!(vertices[8], [1, 0, 0]);
}

#[test]
fn test_all_transparent_grid() {
    let data = cub_bytes(2, 2, 2, &[[0, 0, 0]; 8]);
    let out = convert(&data, "void").unwrap();

    assert_eq!(out.obj.lines().count(), 2);
    assert!(!out.obj.contains("\no "));
    assert_eq!(out.mtl.lines().count(), 1);
    assert!(out.mtl.starts_with("# CUB to OBJ v"));
    assert_eq!(out.stats.objects, 0);
}

#[test]
fn test_zero_extent_with_huge_extents() {
    let data = cub_bytes(u32::MAX, u32::MAX, 0, &[]);
    let out = convert(&data, "flat").unwrap();

    assert_eq!(out.stats.cells, 0);
    assert_eq!(out.stats.objects, 0);
    assert_eq!(out.obj.lines().count(), 2);
    assert_eq!(out.mtl.lines().count(), 1);
}

#[test]
fn test_transparent_cells_emit_nothing() {
    let cells = [[0, 0, 0], [5, 5, 5], [0, 0, 0], [0, 0, 0]];
    let data = cub_bytes(4, 1, 1, &cells);
    let out = convert(&data, "sparse").unwrap();

    let objects = parse_objects(&out.obj);
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].1.len(), 8);
    assert_eq!(objects[0].1[0], [1, 0, 0]);
    assert!(!out.mtl.contains("Kd 0 0 0"));
}

#[test]
fn test_objects_follow_first_appearance() {
    // Flat order x fastest: blue appears first, then green, then red
    let blue = [0, 0, 255];
    let green = [0, 255, 0];
    let red = [255, 0, 0];
    let cells = [blue, green, blue, red, green, red, blue, red];
    let data = cub_bytes(2, 2, 2, &cells);
    let out = convert(&data, "rgb").unwrap();

    let names: Vec<String> = parse_objects(&out.obj).into_iter().map(|o| o.0).collect();
    assert_eq!(names, vec!["rgb-obj-0", "rgb-obj-1", "rgb-obj-2"]);

    let kd: Vec<&str> = out.mtl.lines().filter(|l| l.starts_with("Kd")).collect();
    assert_eq!(kd, vec!["Kd 0 0 1.000000", "Kd 0 1.000000 0", "Kd 1.000000 0 0"]);
}

#[test]
fn test_face_indices_bounded_and_increasing() {
    let cells: Vec<[u8; 3]> = (0..27u8)
        .map(|i| match i % 4 {
            0 => [0, 0, 0],
            n => [n * 60, 10, 200],
        })
        .collect();
    let data = cub_bytes(3, 3, 3, &cells);
    let out = convert(&data, "mix").unwrap();

    let mut pool_end = 0;
    let mut highest_seen = 0;
    for (_, vertices, faces) in parse_objects(&out.obj) {
        let pool_start = pool_end + 1;
        pool_end += vertices.len();

        for cube in faces.chunks(6) {
            let lowest = cube.iter().flatten().min().copied().unwrap();
            assert!(lowest > highest_seen);
            for face in cube {
                for &index in face {
                    assert!((pool_start..=pool_end).contains(&index));
                }
            }
            highest_seen = cube.iter().flatten().max().copied().unwrap();
        }
    }
    assert_eq!(pool_end, out.stats.vertices);
}

#[test]
fn test_vertex_positions_match_cells() {
    // 1x2x3 column, only the top cell filled
    let mut cells = vec![[0, 0, 0]; 6];
    cells[5] = [1, 2, 3]; // x=0, y=1, z=2
    let data = cub_bytes(1, 2, 3, &cells);
    let out = convert(&data, "top").unwrap();

    let objects = parse_objects(&out.obj);
    assert_eq!(objects[0].1[0], [0, 1, 2]);
    assert_eq!(objects[0].1[7], [1, 2, 3]);
}

#[test]
fn test_malformed_header_rejected() {
    let err = convert(&[0u8; 8], "short").unwrap_err();
    assert_eq!(
        err,
        CubError::TruncatedHeader {
            expected_bytes: 12,
            available_bytes: 8
        }
    );
}

#[test]
fn test_mismatched_payload_rejected_by_default() {
    let data = cub_bytes(2, 2, 2, &[[1, 1, 1]; 7]);
    assert!(matches!(
        convert(&data, "short"),
        Err(CubError::CellCountMismatch {
            expected: 8,
            found: 7
        })
    ));
}
