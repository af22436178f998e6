//! GLSL sources compiled into the binary.
//!
//! Every entry can be overridden at runtime by a file of the same name in
//! the configured shader directory.

use std::path::Path;

const SHADERS: &[(&str, &str)] = &[
    ("hello_triangle.vs", include_str!("../shaders/hello_triangle.vs")),
    ("hello_triangle.fs", include_str!("../shaders/hello_triangle.fs")),
    ("shaders_uniform.fs", include_str!("../shaders/shaders_uniform.fs")),
    ("shaders_interpolation.vs", include_str!("../shaders/shaders_interpolation.vs")),
    ("shaders_interpolation.fs", include_str!("../shaders/shaders_interpolation.fs")),
    ("textured_cube.vs", include_str!("../shaders/textured_cube.vs")),
    ("textured_cube.fs", include_str!("../shaders/textured_cube.fs")),
    ("dice_face.fs", include_str!("../shaders/dice_face.fs")),
    ("dice_array.vs", include_str!("../shaders/dice_array.vs")),
    ("dice_array.fs", include_str!("../shaders/dice_array.fs")),
    ("colors.vs", include_str!("../shaders/colors.vs")),
    ("colors.fs", include_str!("../shaders/colors.fs")),
    ("light_cube.fs", include_str!("../shaders/light_cube.fs")),
];

pub fn embedded(name: &str) -> Option<&'static str> {
    SHADERS.iter().find(|(n, _)| *n == name).map(|(_, src)| *src)
}

/// Source argument for `ShaderProgram::new`: the override file path when
/// one exists, otherwise the embedded GLSL text.
pub fn source(name: &str, override_dir: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = override_dir.map(|dir| dir.join(name)).filter(|p| p.is_file()) {
        tracing::debug!(path = %path.display(), "using shader override");
        return Ok(path.to_string_lossy().into_owned());
    }
    embedded(name)
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("no shader named {name}"))
}
