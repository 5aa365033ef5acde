use super::{header_comment, material_name};
use crate::palette::ColorRegistry;
use std::fmt::Write as FmtWrite;

/// Serialize the registry to MTL text, one diffuse-only material per color
pub fn serialize_mtl(registry: &ColorRegistry, name: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", header_comment());

    for (index, color) in registry.iter() {
        let [r, g, b] = color.normalized().map(format_component);
        let _ = writeln!(output);
        let _ = writeln!(output, "newmtl {}", material_name(name, index));
        let _ = writeln!(output, "Kd {} {} {}", r, g, b);
    }

    output
}

/// Format a unit-range color component with 6 decimals; zero is written as `0`.
///
/// ```
/// use cub::io::wavefront::format_component;
///
/// assert_eq!(format_component(0.0), "0");
/// assert_eq!(format_component(0.25), "0.250000");
/// assert_eq!(format_component(1.0), "1.000000");
/// ```
pub fn format_component(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{:.6}", value)
}
