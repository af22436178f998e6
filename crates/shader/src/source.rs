//! Shader source lookup.
//!
//! A source argument is either a path to a GLSL file or the GLSL text itself.
//! The path interpretation wins when the file can be read.

use std::borrow::Cow;
use std::fs;

/// Read `source` as a file path, falling back to treating it as GLSL text.
pub fn resolve(source: &str) -> Cow<'_, str> {
    match fs::read_to_string(source) {
        Ok(text) => {
            tracing::debug!(path = source, bytes = text.len(), "loaded shader source from file");
            Cow::Owned(text)
        }
        Err(_) => Cow::Borrowed(source),
    }
}
