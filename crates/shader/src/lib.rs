//! Shader programs: compile a vertex/fragment pair, link it, push uniforms.
//!
//! All GL calls go through [`ShaderBackend`], implemented for
//! [`glow::Context`]. A program is created against a backend and every later
//! call takes the same backend by reference.
//!
//! # Invariants
//! - A [`ShaderProgram`] is always fully linked; compile or link failure
//!   returns an error and leaves no GL objects behind.
//! - Stage objects are released once linking finishes.
//! - Unknown uniforms and wrong uniform arities are programming errors and
//!   panic (unless the program opts into [`MissingUniform::Ignore`]).

mod backend;
mod error;
mod glow_backend;
mod program;
pub mod source;
mod uniform;

#[cfg(test)]
mod fake;

pub use backend::{ShaderBackend, ShaderStage};
pub use error::ShaderError;
pub use program::{MissingUniform, ShaderProgram};
pub use uniform::UniformValue;
