use crate::config::{CameraConfig, MAX_PITCH, MAX_ZOOM, MIN_ZOOM};
use glam::{Mat4, Vec3};

/// Near clip plane used by [`Camera::projection_matrix`].
pub const NEAR_PLANE: f32 = 0.1;
/// Far clip plane used by [`Camera::projection_matrix`].
pub const FAR_PLANE: f32 = 100.0;

/// Keyboard movement, abstracted away from the windowing layer's key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Fly camera with position, yaw and pitch in degrees, and a zoom angle.
///
/// The basis vectors are recomputed from yaw/pitch on every orientation
/// change and cannot be set directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            front: Vec3::NEG_Z,
            up: config.world_up,
            right: Vec3::X,
            world_up: config.world_up,
            yaw: config.yaw,
            pitch: config.pitch.clamp(-MAX_PITCH, MAX_PITCH),
            speed: config.speed,
            sensitivity: config.sensitivity,
            zoom: config.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        };
        camera.update_vectors();
        camera
    }

    /// Camera at `position` with every other field at its default.
    pub fn at(position: Vec3) -> Self {
        Self::new(CameraConfig::default().with_position(position))
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Move along `front` or `right` by `speed * dt`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a cursor offset. Positive `y_offset` looks up.
    ///
    /// Without `constrain_pitch` the pitch is unbounded. At exactly +/-90 degrees
    /// `front` is parallel to the world up, so `right` only comes from rounding
    /// noise: it stays horizontal and unit length but its sign is arbitrary and
    /// can flip relative to a pitch of 89 degrees.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch += y_offset * self.sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
        }

        self.update_vectors();
    }

    /// Positive `y_offset` zooms in (narrows the field of view).
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as vertical field of view.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        // Normalized so strafing speed does not shrink as pitch approaches the poles.
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
        tracing::trace!(yaw = self.yaw, pitch = self.pitch, "camera basis updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(cam: &Camera) {
        let (f, r, u) = (cam.front(), cam.right(), cam.up());
        assert!((f.length() - 1.0).abs() < EPS, "front not unit: {f}");
        assert!((r.length() - 1.0).abs() < EPS, "right not unit: {r}");
        assert!((u.length() - 1.0).abs() < EPS, "up not unit: {u}");
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = Camera::default();
        assert!(cam.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(cam.right().abs_diff_eq(Vec3::X, EPS));
        assert!(cam.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(cam.zoom(), 45.0);
    }

    #[test]
    fn view_matrix_matches_look_at() {
        let cam = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, 2.0), Vec3::Y);
        assert!(cam.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn basis_is_orthonormal_over_angle_sweep() {
        let mut cam = Camera::default();
        for _ in 0..72 {
            cam.process_mouse_movement(50.0, 7.0, true);
            assert_orthonormal(&cam);
        }
        for _ in 0..72 {
            cam.process_mouse_movement(-33.0, -11.0, true);
            assert_orthonormal(&cam);
        }
    }

    #[test]
    fn pitch_is_clamped_when_constrained() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(cam.pitch(), 89.0);
        cam.process_mouse_movement(0.0, -50_000.0, true);
        assert_eq!(cam.pitch(), -89.0);
        assert_orthonormal(&cam);
    }

    #[test]
    fn pitch_is_free_when_unconstrained() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 1000.0, false);
        assert_eq!(cam.pitch(), 100.0);
    }

    #[test]
    fn mouse_offsets_are_scaled_by_sensitivity() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(10.0, 5.0, true);
        assert!((cam.yaw() - (-89.0)).abs() < EPS);
        assert!((cam.pitch() - 0.5).abs() < EPS);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::default();
        cam.process_mouse_scroll(-10.0);
        assert_eq!(cam.zoom(), 45.0);
        cam.process_mouse_scroll(20.0);
        assert_eq!(cam.zoom(), 25.0);
        cam.process_mouse_scroll(100.0);
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn forward_then_backward_returns_home() {
        let mut cam = Camera::at(Vec3::new(1.0, 2.0, 3.0));
        cam.process_mouse_movement(123.0, -45.0, true);
        let start = cam.position();
        cam.process_keyboard(CameraMovement::Forward, 0.37);
        assert!(!cam.position().abs_diff_eq(start, EPS));
        cam.process_keyboard(CameraMovement::Backward, 0.37);
        assert!(cam.position().abs_diff_eq(start, EPS));
    }

    #[test]
    fn strafe_moves_along_right() {
        let mut cam = Camera::default();
        cam.process_keyboard(CameraMovement::Right, 1.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(2.5, 0.0, 0.0), EPS));
        cam.process_keyboard(CameraMovement::Left, 2.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(-2.5, 0.0, 0.0), EPS));
    }

    #[test]
    fn config_values_are_clamped_on_construction() {
        let cam = Camera::new(CameraConfig {
            pitch: 120.0,
            zoom: 90.0,
            ..CameraConfig::default()
        });
        assert_eq!(cam.pitch(), 89.0);
        assert_eq!(cam.zoom(), 45.0);
    }

    #[test]
    fn projection_has_no_nan() {
        let cam = Camera::default();
        let p = cam.projection_matrix(800.0 / 600.0);
        assert!(!p.is_nan());
    }

    #[test]
    fn unconstrained_pole_keeps_a_unit_horizontal_basis() {
        for (offset, pole) in [(900.0, Vec3::Y), (-900.0, Vec3::NEG_Y)] {
            let mut cam = Camera::default();
            cam.process_mouse_movement(0.0, offset, false);
            assert_eq!(cam.pitch(), offset / 10.0);

            assert!(cam.front().abs_diff_eq(pole, EPS), "front {}", cam.front());
            assert!(cam.right().is_finite() && cam.up().is_finite());
            assert!(cam.right().y.abs() < EPS);
            assert!((cam.right().x.abs() - 1.0).abs() < EPS, "right {}", cam.right());
            assert_orthonormal(&cam);
        }
    }
}
