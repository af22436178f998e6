use anyhow::Context;
use glam::Vec3;
use learngl_camera::CameraConfig;
use learngl_render_gl::WindowConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings, optionally loaded from a YAML file.
///
/// ```yaml
/// window:
///   width: 1280
///   height: 720
/// camera:
///   speed: 5.0
/// assets: ./resources
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowConfig,
    /// Starting camera state for scenes that use the camera.
    pub camera: CameraConfig,
    /// Directory holding texture images.
    pub assets: PathBuf,
    /// Directory whose GLSL files replace the embedded shaders.
    pub shader_dir: Option<PathBuf>,
    /// Hide and lock the cursor in camera scenes.
    pub capture_cursor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default().with_position(Vec3::new(0.0, 0.0, 3.0)),
            assets: PathBuf::from("resources"),
            shader_dir: None,
            capture_cursor: true,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading settings {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("parsing settings {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
