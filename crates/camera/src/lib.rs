//! Free-fly camera driven by Euler angles.
//!
//! Keyboard movement, mouse look and scroll zoom are applied in place; the
//! view matrix is derived from the current state on demand.
//!
//! # Invariants
//! - Front, right and up are always an orthonormal basis derived from yaw/pitch.
//! - Pitch stays within [-89, 89] degrees when constrained.
//! - Zoom stays within [1, 45] degrees.

mod camera;
mod config;

pub use camera::{Camera, CameraMovement, FAR_PLANE, NEAR_PLANE};
pub use config::{CameraConfig, MAX_PITCH, MAX_ZOOM, MIN_ZOOM};
