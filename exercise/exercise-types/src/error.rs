//! Error types for exercise configuration.

use thiserror::Error;

/// Errors raised while building an exercise session.
///
/// All of these are configuration problems detected at construction time.
/// A running session never produces one.
#[derive(Debug, Error)]
pub enum ExerciseError {
    /// The exercise path has no targets.
    #[error("exercise path is empty")]
    EmptyPath,

    /// A target has no usable direction.
    #[error("invalid target {index}: {reason}")]
    InvalidTarget {
        /// Position of the target in the path.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A session parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ExerciseError {
    /// Creates an invalid target error.
    #[must_use]
    pub fn invalid_target(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            index,
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Result type for exercise configuration.
pub type Result<T> = std::result::Result<T, ExerciseError>;
