//! OpenGL support layer over glow.
//!
//! Creates the window and GL context, uploads vertex data and textures. Every
//! GPU object here has an explicit `destroy` that must run while the context
//! is still current; nothing is released on drop.
//!
//! # Invariants
//! - Image rows are stored bottom-up before upload, matching GL's origin.
//! - Attribute layouts are tightly packed `f32` components.

mod context;
mod error;
mod image_data;
mod mesh;
mod texture;

pub use context::{GlWindow, WindowConfig};
pub use error::GlError;
pub use image_data::ImageData;
pub use mesh::{Mesh, VertexLayout};
pub use texture::{Texture2D, TextureArray};
