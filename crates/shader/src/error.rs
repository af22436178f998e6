use crate::backend::ShaderStage;

/// Recoverable failures while building a shader program.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to create {object}: {reason}")]
    Create { object: &'static str, reason: String },
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
}

impl ShaderError {
    /// Stage that failed to compile, if this is a compile error.
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            ShaderError::Compile { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
