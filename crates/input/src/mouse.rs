use glam::Vec2;

/// Turns absolute cursor positions into look offsets.
///
/// Window coordinates grow downward, so the returned Y offset is inverted:
/// moving the cursor up yields a positive offset (look up).
#[derive(Debug, Default, Clone)]
pub struct MouseLook {
    last: Option<Vec2>,
}

impl MouseLook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a cursor position. The first position after creation or
    /// [`reset`](Self::reset) only primes the tracker and returns `None`.
    pub fn offset(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let pos = Vec2::new(x, y);
        let last = self.last.replace(pos)?;
        Some(Vec2::new(pos.x - last.x, last.y - pos.y))
    }

    /// Forget the last position, e.g. after the cursor re-enters the window.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
