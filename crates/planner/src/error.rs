//! Planner errors.

use std::path::PathBuf;

use stillreel_host_core::HostError;

/// Errors that abort a placement run.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Invalid placement configuration: {message}")]
    InvalidConfig { message: String },

    #[error("No video track is selected; select a video track and run again")]
    NoSelectedVideoTrack,

    #[error("Failed to query host tracks: {0}")]
    TrackQuery(#[source] HostError),

    #[error("Failed to read host cursor position: {0}")]
    Cursor(#[source] HostError),

    #[error("Failed to list stills: {0}")]
    Source(#[source] HostError),

    #[error("Failed to place still #{index} ({path}): {source}")]
    Insert {
        index: usize,
        path: PathBuf,
        #[source]
        source: HostError,
    },
}

impl PlanError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: msg.into(),
        }
    }
}
