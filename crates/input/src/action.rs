use learngl_camera::CameraMovement;
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// A high-level action a key can be bound to.
///
/// Scenes and the camera consume actions, never raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the camera while the key is held.
    Move(CameraMovement),
    /// Leave the render loop.
    Exit,
}

/// Key code to action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Action>,
}

impl Default for KeyBindings {
    /// WASD and arrow keys move, Escape exits.
    fn default() -> Self {
        let mut bindings = HashMap::new();
        for (keys, movement) in [
            ([KeyCode::KeyW, KeyCode::ArrowUp], CameraMovement::Forward),
            ([KeyCode::KeyS, KeyCode::ArrowDown], CameraMovement::Backward),
            ([KeyCode::KeyA, KeyCode::ArrowLeft], CameraMovement::Left),
            ([KeyCode::KeyD, KeyCode::ArrowRight], CameraMovement::Right),
        ] {
            for key in keys {
                bindings.insert(key, Action::Move(movement));
            }
        }
        bindings.insert(KeyCode::Escape, Action::Exit);
        Self { bindings }
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key` to `action`, returning the action it replaced.
    pub fn bind(&mut self, key: KeyCode, action: Action) -> Option<Action> {
        let previous = self.bindings.insert(key, action);
        if let Some(prev) = previous.filter(|p| *p != action) {
            tracing::debug!(?key, ?prev, ?action, "key rebound");
        }
        previous
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<Action> {
        self.bindings.remove(&key)
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

/// Keys currently held down.
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    held: HashSet<KeyCode>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Movements bound to currently held keys, one per direction.
    pub fn movements(&self, bindings: &KeyBindings) -> HashSet<CameraMovement> {
        self.held
            .iter()
            .filter_map(|&key| match bindings.action(key) {
                Some(Action::Move(m)) => Some(m),
                _ => None,
            })
            .collect()
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        if !self.held.is_empty() {
            tracing::debug!(count = self.held.len(), "releasing held keys");
        }
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let b = KeyBindings::default();
        assert_eq!(b.action(KeyCode::KeyW), Some(Action::Move(CameraMovement::Forward)));
        assert_eq!(b.action(KeyCode::ArrowLeft), Some(Action::Move(CameraMovement::Left)));
        assert_eq!(b.action(KeyCode::Escape), Some(Action::Exit));
        assert_eq!(b.action(KeyCode::KeyQ), None);
    }

    #[test]
    fn rebinding_replaces_action() {
        let mut b = KeyBindings::empty();
        assert_eq!(b.bind(KeyCode::KeyZ, Action::Move(CameraMovement::Forward)), None);
        assert_eq!(
            b.bind(KeyCode::KeyZ, Action::Exit),
            Some(Action::Move(CameraMovement::Forward))
        );
        assert_eq!(b.unbind(KeyCode::KeyZ), Some(Action::Exit));
        assert_eq!(b.action(KeyCode::KeyZ), None);
    }

    #[test]
    fn held_keys_map_to_movements() {
        let bindings = KeyBindings::default();
        let mut keys = KeyState::new();
        keys.set(KeyCode::KeyW, true);
        keys.set(KeyCode::ArrowUp, true);
        keys.set(KeyCode::KeyD, true);
        keys.set(KeyCode::Escape, true);

        let moves = keys.movements(&bindings);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&CameraMovement::Forward));
        assert!(moves.contains(&CameraMovement::Right));

        keys.set(KeyCode::KeyD, false);
        assert!(!keys.movements(&bindings).contains(&CameraMovement::Right));

        keys.clear();
        assert!(keys.movements(&bindings).is_empty());
    }
}
