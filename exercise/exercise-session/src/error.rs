//! Error types for engine construction.

use audio_cues::AudioError;
use exercise_types::ExerciseError;
use thiserror::Error;

/// Errors raised while building a [`SessionEngine`](crate::SessionEngine).
///
/// Construction is the only fallible step; ticking never fails.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The session configuration is invalid.
    #[error(transparent)]
    Exercise(#[from] ExerciseError),

    /// The cue configuration is invalid.
    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// Result type for engine construction.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_exercise_error() {
        let err: EngineError = ExerciseError::EmptyPath.into();
        assert!(matches!(err, EngineError::Exercise(_)));
        assert!(err.to_string().contains("exercise path is empty"));
    }

    #[test]
    fn wraps_audio_error() {
        let err: EngineError = AudioError::invalid_config("bad threshold").into();
        assert!(matches!(err, EngineError::Audio(_)));
        assert!(err.to_string().contains("bad threshold"));
    }
}
