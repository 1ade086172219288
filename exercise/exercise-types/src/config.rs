//! Session parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sensor_types::Duration;

use crate::error::{ExerciseError, Result};
use crate::path::ExercisePath;

/// Parameters for one exercise session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SessionConfig {
    /// Targets for one repetition. Default: the five-point head circle.
    pub path: ExercisePath,

    /// Repetitions to complete the session. Default: 10
    pub target_repetitions: u32,

    /// Proximity above which a target counts as reached. Default: 0.8
    pub reach_threshold: f64,

    /// Acceleration magnitude (m/s², gravity included) above which a motion
    /// sample counts as the start shake. Default: 15.0
    pub shake_threshold: f64,

    /// How long `shake_feedback` stays set after the start gesture.
    /// Default: 500 ms
    pub shake_feedback: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: ExercisePath::default(),
            target_repetitions: 10,
            reach_threshold: 0.8,
            shake_threshold: 15.0,
            shake_feedback: Duration::from_millis(500),
        }
    }
}

impl SessionConfig {
    /// Create a config for the given path, other values default.
    #[must_use]
    pub fn with_path(path: ExercisePath) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Set the number of repetitions.
    #[must_use]
    pub fn with_target_repetitions(mut self, repetitions: u32) -> Self {
        self.target_repetitions = repetitions;
        self
    }

    /// Set the reach threshold.
    #[must_use]
    pub fn with_reach_threshold(mut self, threshold: f64) -> Self {
        self.reach_threshold = threshold;
        self
    }

    /// Set the shake threshold.
    #[must_use]
    pub fn with_shake_threshold(mut self, threshold: f64) -> Self {
        self.shake_threshold = threshold;
        self
    }

    /// Set the shake feedback window.
    #[must_use]
    pub fn with_shake_feedback(mut self, window: Duration) -> Self {
        self.shake_feedback = window;
        self
    }

    /// Checks that the parameters describe a session that can finish.
    ///
    /// The path is validated when it is built, so only the scalars are
    /// checked here.
    ///
    /// # Errors
    ///
    /// Returns [`ExerciseError::InvalidConfig`] if `target_repetitions` is
    /// zero, `reach_threshold` is not in `[0, 1)`, or `shake_threshold` is
    /// not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.target_repetitions == 0 {
            return Err(ExerciseError::invalid_config(
                "target repetitions must be positive",
            ));
        }
        // Proximity never exceeds 1.0, so a threshold of 1.0 or more could
        // never be crossed.
        if !(0.0..1.0).contains(&self.reach_threshold) {
            return Err(ExerciseError::invalid_config(format!(
                "reach threshold must be in [0, 1), got {}",
                self.reach_threshold
            )));
        }
        if !(self.shake_threshold.is_finite() && self.shake_threshold > 0.0) {
            return Err(ExerciseError::invalid_config(format!(
                "shake threshold must be positive, got {}",
                self.shake_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::path::TargetPosition;
    use approx::assert_relative_eq;

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.target_repetitions, 10);
        assert_relative_eq!(config.reach_threshold, 0.8);
        assert_relative_eq!(config.shake_threshold, 15.0);
        assert_eq!(config.shake_feedback.as_millis(), 500);
        assert_eq!(config.path.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder() {
        let path = ExercisePath::new(vec![TargetPosition::new(0.0, 0.0, -1.0)]).unwrap();
        let config = SessionConfig::with_path(path)
            .with_target_repetitions(3)
            .with_reach_threshold(0.9)
            .with_shake_threshold(12.0)
            .with_shake_feedback(Duration::zero());
        assert_eq!(config.path.len(), 1);
        assert_eq!(config.target_repetitions, 3);
        assert_relative_eq!(config.reach_threshold, 0.9);
        assert_relative_eq!(config.shake_threshold, 12.0);
        assert!(config.shake_feedback.is_zero());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_repetitions_rejected() {
        let config = SessionConfig::default().with_target_repetitions(0);
        assert!(matches!(
            config.validate(),
            Err(ExerciseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn unreachable_threshold_rejected() {
        assert!(SessionConfig::default().with_reach_threshold(1.0).validate().is_err());
        assert!(SessionConfig::default().with_reach_threshold(-0.1).validate().is_err());
        assert!(SessionConfig::default().with_reach_threshold(f64::NAN).validate().is_err());
    }

    #[test]
    fn bad_shake_threshold_rejected() {
        assert!(SessionConfig::default().with_shake_threshold(0.0).validate().is_err());
        assert!(SessionConfig::default().with_shake_threshold(f64::INFINITY).validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{ "target_repetitions": 3 }"#).unwrap();
        assert_eq!(config.target_repetitions, 3);
        assert_eq!(config.path, ExercisePath::default());
    }
}
