use super::{header_comment, material_name, object_name};
use crate::mesh::{ObjectGroup, Scene};
use std::fmt::Write as FmtWrite;

/// Serialize a scene to OBJ text referencing `<name>.mtl`
///
/// Each group is written as a blank line followed by its object block:
///
/// ```text
/// o <name>-obj-<i>
/// v x y z          (one per vertex)
/// usemtl <name>-mat-<i>
/// s off
/// f a b c d        (one per quad)
/// ```
pub fn serialize_obj(scene: &Scene, name: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", header_comment());
    let _ = writeln!(output, "mtllib {}.mtl", name);

    for group in &scene.groups {
        let _ = writeln!(output);
        write_group(group, name, &mut output);
    }

    output
}

fn write_group(group: &ObjectGroup, name: &str, output: &mut String) {
    let _ = writeln!(output, "o {}", object_name(name, group.color_index));
    for v in &group.vertices {
        let _ = writeln!(output, "v {} {} {}", v.x, v.y, v.z);
    }
    let _ = writeln!(output, "usemtl {}", material_name(name, group.color_index));
    let _ = writeln!(output, "s off");
    for [a, b, c, d] in &group.faces {
        let _ = writeln!(output, "f {} {} {} {}", a, b, c, d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimensions;
    use crate::mesh::assemble_scene;

    #[test]
    fn test_empty_scene_keeps_header() {
        let obj = serialize_obj(&Scene::default(), "model");
        let lines: Vec<&str> = obj.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("# CUB to OBJ v"));
        assert_eq!(lines[1], "mtllib model.mtl");
    }

    #[test]
    fn test_single_cube_block() {
        let scene = assemble_scene(Dimensions::new(1, 1, 1), &[Some(0)]);
        let obj = serialize_obj(&scene, "box");

        let expected_body = "\n\
o box-obj-0
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
v 0 0 1
v 1 0 1
v 0 1 1
v 1 1 1
usemtl box-mat-0
s off
f 1 2 4 3
f 3 4 8 7
f 7 8 6 5
f 5 6 2 1
f 3 7 5 1
f 8 4 2 6
";
        assert!(obj.starts_with("# CUB to OBJ v"));
        assert!(
            obj.ends_with(&format!("mtllib box.mtl\n{}", expected_body)),
            "unexpected output:\n{}",
            obj
        );
    }

    #[test]
    fn test_groups_separated_by_blank_line() {
        let scene = assemble_scene(Dimensions::new(2, 1, 1), &[Some(0), Some(1)]);
        let obj = serialize_obj(&scene, "pair");

        assert!(obj.contains("f 5 6 2 1\nf 3 7 5 1\nf 8 4 2 6\n\no pair-obj-1\nv 1 0 0\n"));
        assert!(obj.contains("usemtl pair-mat-1"));
        assert!(obj.contains("f 9 10 12 11"));
        assert_eq!(obj.matches("\n\n").count(), 2);
    }
}
