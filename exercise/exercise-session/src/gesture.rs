//! Shake gesture detection.

use exercise_types::SessionState;
use sensor_types::MotionReading;

/// Recognises the shake that starts a session.
///
/// A shake is a motion sample whose gravity-inclusive acceleration magnitude
/// exceeds the threshold. Detection is edge-triggered: a start signal fires
/// on the first sample above the threshold, and the detector re-arms only
/// after a sample at or below it. A sustained shake therefore produces one
/// signal, not one per tick.
///
/// Signals fire only while the session is [`SessionState::Waiting`]. A
/// crossing that happens in any other state still disarms the detector.
///
/// # Example
///
/// ```
/// use exercise_session::ShakeDetector;
/// use exercise_types::SessionState;
/// use sensor_types::{MotionReading, Vector3Reading};
///
/// let mut detector = ShakeDetector::new(15.0);
/// let shake = MotionReading::with_gravity(Vector3Reading::new(0.0, 20.0, 0.0));
///
/// assert!(detector.detect(&shake, SessionState::Waiting));
/// assert!(!detector.detect(&shake, SessionState::Waiting));
/// ```
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    threshold: f64,
    armed: bool,
}

impl ShakeDetector {
    /// Creates an armed detector.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            armed: true,
        }
    }

    /// Magnitude a sample must exceed.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether the next crossing will signal.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether `motion` exceeds the threshold, ignoring arming and state.
    #[must_use]
    pub fn exceeds(&self, motion: &MotionReading) -> bool {
        motion.total_acceleration() > self.threshold
    }

    /// Evaluates one sample. Returns `true` if the session should start.
    pub fn detect(&mut self, motion: &MotionReading, state: SessionState) -> bool {
        if !self.exceeds(motion) {
            self.armed = true;
            return false;
        }

        let fire = self.armed && state == SessionState::Waiting;
        self.armed = false;
        fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_types::Vector3Reading;

    fn sample(magnitude: f64) -> MotionReading {
        MotionReading::with_gravity(Vector3Reading::new(0.0, 0.0, magnitude))
    }

    #[test]
    fn below_threshold_never_fires() {
        let mut detector = ShakeDetector::new(15.0);
        assert!(!detector.detect(&sample(10.0), SessionState::Waiting));
        assert!(!detector.detect(&sample(15.0), SessionState::Waiting));
        assert!(detector.is_armed());
    }

    #[test]
    fn fires_once_per_crossing() {
        let mut detector = ShakeDetector::new(15.0);
        assert!(detector.detect(&sample(20.0), SessionState::Waiting));
        assert!(!detector.detect(&sample(25.0), SessionState::Waiting));
        assert!(!detector.detect(&sample(5.0), SessionState::Waiting));
        assert!(detector.detect(&sample(16.0), SessionState::Waiting));
    }

    #[test]
    fn ignored_outside_waiting() {
        let mut detector = ShakeDetector::new(15.0);
        assert!(!detector.detect(&sample(20.0), SessionState::Playing));
        assert!(!detector.is_armed());
        // Still above threshold after a reset to waiting: same crossing.
        assert!(!detector.detect(&sample(20.0), SessionState::Waiting));
        assert!(!detector.detect(&sample(9.81), SessionState::Waiting));
        assert!(detector.detect(&sample(20.0), SessionState::Waiting));
    }

    #[test]
    fn uses_euclidean_norm() {
        let detector = ShakeDetector::new(15.0);
        let diagonal = MotionReading::with_gravity(Vector3Reading::new(9.0, 9.0, 9.0));
        assert!(detector.exceeds(&diagonal));
        assert!((detector.threshold() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_sensor_is_at_rest() {
        let mut detector = ShakeDetector::new(15.0);
        assert!(!detector.detect(&MotionReading::default(), SessionState::Waiting));
    }
}
