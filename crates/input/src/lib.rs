//! Input mapping: window events to camera actions.
//!
//! The camera never sees raw key codes or cursor positions. Key presses are
//! resolved through [`KeyBindings`] into [`Action`]s, cursor positions are
//! turned into offsets by [`MouseLook`], and [`CameraController`] applies
//! both once per frame.
//!
//! # Invariants
//! - The first cursor event after (re)capture produces no camera rotation.
//! - Movement is applied once per frame per held direction, scaled by frame time.

pub mod action;
mod controller;
mod mouse;

pub use action::{Action, KeyBindings, KeyState};
pub use controller::CameraController;
pub use mouse::MouseLook;
