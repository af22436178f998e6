use crate::action::{KeyBindings, KeyState};
use crate::mouse::MouseLook;
use learngl_camera::{Camera, CameraMovement};

/// Applies keyboard, cursor and scroll input to a [`Camera`].
#[derive(Debug, Clone)]
pub struct CameraController {
    bindings: KeyBindings,
    look: MouseLook,
    constrain_pitch: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl CameraController {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            look: MouseLook::new(),
            constrain_pitch: true,
        }
    }

    pub fn with_constrained_pitch(mut self, constrain: bool) -> Self {
        self.constrain_pitch = constrain;
        self
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Move the camera for every held movement key.
    pub fn update(&self, camera: &mut Camera, keys: &KeyState, dt: f32) {
        // Fixed order keeps the result independent of hash iteration order.
        let held = keys.movements(&self.bindings);
        for movement in [
            CameraMovement::Forward,
            CameraMovement::Backward,
            CameraMovement::Left,
            CameraMovement::Right,
        ] {
            if held.contains(&movement) {
                camera.process_keyboard(movement, dt);
            }
        }
    }

    pub fn cursor_moved(&mut self, camera: &mut Camera, x: f32, y: f32) {
        if let Some(offset) = self.look.offset(x, y) {
            camera.process_mouse_movement(offset.x, offset.y, self.constrain_pitch);
        }
    }

    /// Raw pointer motion from a captured cursor. Screen y grows downward,
    /// so the vertical delta is inverted before reaching the camera.
    pub fn mouse_delta(&self, camera: &mut Camera, dx: f32, dy: f32) {
        camera.process_mouse_movement(dx, -dy, self.constrain_pitch);
    }

    pub fn scrolled(&self, camera: &mut Camera, y_offset: f32) {
        camera.process_mouse_scroll(y_offset);
    }

    /// Forget the last cursor position so the next event does not jump.
    pub fn cursor_left(&mut self) {
        self.look.reset();
    }

    /// Release held keys and re-prime mouse look after the window loses focus.
    pub fn focus_lost(&mut self, keys: &mut KeyState) {
        keys.clear();
        self.look.reset();
    }
}
