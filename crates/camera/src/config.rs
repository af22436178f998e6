use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Pitch limit in degrees, applied symmetrically.
pub const MAX_PITCH: f32 = 89.0;
/// Narrowest field of view in degrees.
pub const MIN_ZOOM: f32 = 1.0;
/// Widest field of view in degrees.
pub const MAX_ZOOM: f32 = 45.0;

/// Starting state of a [`Camera`](crate::Camera).
///
/// Every field has a default, so a settings file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub world_up: Vec3,
    /// Degrees. -90 makes the initial front vector point down -Z.
    pub yaw: f32,
    /// Degrees.
    pub pitch: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees per pixel of cursor travel.
    pub sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
            zoom: MAX_ZOOM,
        }
    }
}

impl CameraConfig {
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}
