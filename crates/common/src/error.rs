//! Error types shared across stillreel crates.

use std::path::PathBuf;

/// Top-level error type for stillreel operations.
#[derive(Debug, thiserror::Error)]
pub enum StillreelError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using StillreelError.
pub type StillreelResult<T> = Result<T, StillreelError>;

impl StillreelError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
