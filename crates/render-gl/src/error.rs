/// Errors from GL setup and resource creation.
#[derive(Debug, thiserror::Error)]
pub enum GlError {
    #[error("window/context creation failed: {0}")]
    Context(String),
    #[error("failed to create {object}: {reason}")]
    Create { object: &'static str, reason: String },
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("image data is {actual} bytes, expected {expected}")]
    ImageSize { expected: usize, actual: usize },
    #[error("unsupported channel count: {0}")]
    Channels(u8),
    #[error("texture layer {layer} is {actual:?}, expected {expected:?}")]
    LayerSize {
        layer: usize,
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl From<glutin::error::Error> for GlError {
    fn from(err: glutin::error::Error) -> Self {
        GlError::Context(err.to_string())
    }
}
