//! Last-value-wins holder for asynchronously arriving sensor readings.

use crate::normalize::{RawMotion, RawOrientation, normalize_motion, normalize_orientation};
use crate::{MotionReading, OrientationReading, Timestamp};

/// Holds the most recent orientation and motion readings.
///
/// Sensor events arrive at their own rate, independent of the frame tick.
/// The latch keeps only the newest normalised value of each kind; there is no
/// queue and no backpressure. Before any event has arrived it reports the
/// all-zero defaults, so consumers never have to special-case a missing
/// sensor.
///
/// # Example
///
/// ```
/// use sensor_types::{RawOrientation, SensorLatch, Timestamp};
///
/// let mut latch = SensorLatch::new();
/// assert!(!latch.has_orientation());
///
/// latch.update_orientation(Timestamp::from_millis(5), &RawOrientation { alpha: Some(10.0), ..Default::default() });
/// latch.update_orientation(Timestamp::from_millis(9), &RawOrientation { alpha: Some(20.0), ..Default::default() });
/// assert!((latch.orientation().alpha - 20.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SensorLatch {
    orientation: Option<(Timestamp, OrientationReading)>,
    motion: Option<(Timestamp, MotionReading)>,
}

impl SensorLatch {
    /// Creates an empty latch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalises and stores an orientation event, replacing the previous one.
    pub fn update_orientation(&mut self, at: Timestamp, raw: &RawOrientation) {
        self.store_orientation(at, normalize_orientation(raw));
    }

    /// Normalises and stores a motion event, replacing the previous one.
    pub fn update_motion(&mut self, at: Timestamp, raw: &RawMotion) {
        self.store_motion(at, normalize_motion(raw));
    }

    /// Stores an already normalised orientation reading.
    pub fn store_orientation(&mut self, at: Timestamp, reading: OrientationReading) {
        self.orientation = Some((at, reading));
    }

    /// Stores an already normalised motion reading.
    pub fn store_motion(&mut self, at: Timestamp, reading: MotionReading) {
        self.motion = Some((at, reading));
    }

    /// The latest orientation, or the zero reading if none has arrived.
    #[must_use]
    pub fn orientation(&self) -> OrientationReading {
        self.orientation.map(|(_, r)| r).unwrap_or_default()
    }

    /// The latest motion, or the zero reading if none has arrived.
    #[must_use]
    pub fn motion(&self) -> MotionReading {
        self.motion.map(|(_, r)| r).unwrap_or_default()
    }

    /// Whether any orientation event has been received.
    #[must_use]
    pub const fn has_orientation(&self) -> bool {
        self.orientation.is_some()
    }

    /// Whether any motion event has been received.
    #[must_use]
    pub const fn has_motion(&self) -> bool {
        self.motion.is_some()
    }

    /// When the latest orientation event was stored.
    #[must_use]
    pub fn orientation_timestamp(&self) -> Option<Timestamp> {
        self.orientation.map(|(at, _)| at)
    }

    /// When the latest motion event was stored.
    #[must_use]
    pub fn motion_timestamp(&self) -> Option<Timestamp> {
        self.motion.map(|(at, _)| at)
    }

    /// Forgets both readings.
    pub fn clear(&mut self) {
        self.orientation = None;
        self.motion = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::RawVector;

    #[test]
    fn empty_latch_reports_defaults() {
        let latch = SensorLatch::new();
        assert_eq!(latch.orientation(), OrientationReading::default());
        assert_eq!(latch.motion(), MotionReading::default());
        assert!(latch.orientation_timestamp().is_none());
        assert!(!latch.has_motion());
    }

    #[test]
    fn last_value_wins() {
        let mut latch = SensorLatch::new();
        for (ms, z) in [(1, 1.0), (2, 2.0), (3, 3.0)] {
            latch.update_motion(
                Timestamp::from_millis(ms),
                &RawMotion {
                    acceleration_including_gravity: Some(RawVector {
                        z: Some(z),
                        ..RawVector::default()
                    }),
                    ..RawMotion::default()
                },
            );
        }
        assert!((latch.motion().total_acceleration() - 3.0).abs() < 1e-12);
        assert_eq!(latch.motion_timestamp(), Some(Timestamp::from_millis(3)));
    }

    #[test]
    fn stored_readings_are_normalised() {
        let mut latch = SensorLatch::new();
        latch.update_orientation(
            Timestamp::zero(),
            &RawOrientation {
                alpha: Some(f64::NAN),
                beta: Some(15.0),
                gamma: None,
            },
        );
        assert!(latch.has_orientation());
        assert_eq!(latch.orientation(), OrientationReading::new(0.0, 15.0, 0.0));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut latch = SensorLatch::new();
        latch.store_orientation(Timestamp::zero(), OrientationReading::new(1.0, 2.0, 3.0));
        latch.store_motion(Timestamp::zero(), MotionReading::default());
        latch.clear();
        assert!(!latch.has_orientation());
        assert!(!latch.has_motion());
    }
}
