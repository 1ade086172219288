//! Error types for the audio-cues crate.

use thiserror::Error;

/// Errors reported by audio sinks and cue configuration.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The audio backend has not finished initialising.
    #[error("audio backend not ready")]
    NotReady,

    /// The audio backend rejected a request.
    #[error("audio backend error: {0}")]
    Backend(String),

    /// Invalid cue configuration.
    #[error("invalid cue configuration: {0}")]
    InvalidConfig(String),
}

impl AudioError {
    /// Creates a backend error.
    #[must_use]
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend(reason.into())
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Result type for audio operations.
pub type Result<T> = std::result::Result<T, AudioError>;
