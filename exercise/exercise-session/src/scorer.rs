//! Proximity scoring against the active target.

use exercise_types::TargetPosition;
use sensor_fusion::{direction_from_orientation, proximity};
use sensor_types::OrientationReading;

/// Scores how closely a device orientation points at a target.
///
/// Stateless and deterministic: the same inputs always give the same score,
/// with no memory of earlier frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProximityScorer;

impl ProximityScorer {
    /// Proximity in `[0, 1]` between the device's facing direction and
    /// `target`.
    ///
    /// # Example
    ///
    /// ```
    /// use exercise_session::ProximityScorer;
    /// use exercise_types::TargetPosition;
    /// use sensor_types::OrientationReading;
    ///
    /// let scorer = ProximityScorer;
    /// let p = scorer.proximity(&OrientationReading::default(), TargetPosition::new(0.0, 0.0, -5.0));
    /// assert!((p - 1.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn proximity(&self, orientation: &OrientationReading, target: TargetPosition) -> f64 {
        proximity(direction_from_orientation(orientation), target.to_vec3())
    }

    /// Points for reaching a target at `proximity`: `round(proximity * 100)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn points(proximity: f64) -> u32 {
        (proximity.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}
