//! Device motion readings (accelerometer and gyroscope).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A three-component vector reading in the device frame.
///
/// Used for both linear acceleration and acceleration including gravity,
/// in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector3Reading {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3Reading {
    /// Creates a vector reading.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Components as an array `[x, y, z]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Angular velocity about the three orientation axes, in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationRate {
    /// Rate about the vertical axis.
    pub alpha: f64,
    /// Rate about the lateral axis.
    pub beta: f64,
    /// Rate about the longitudinal axis.
    pub gamma: f64,
}

impl RotationRate {
    /// Creates a rotation rate reading.
    #[must_use]
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Euclidean norm of the rate vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.alpha.hypot(self.beta).hypot(self.gamma)
    }
}

/// A complete device motion sample.
///
/// # Example
///
/// ```
/// use sensor_types::{MotionReading, Vector3Reading};
///
/// let shake = MotionReading::with_gravity(Vector3Reading::new(12.0, 16.0, 0.0));
/// assert!((shake.total_acceleration() - 20.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionReading {
    /// Acceleration with gravity removed.
    pub acceleration: Vector3Reading,
    /// Raw accelerometer output, gravity included.
    pub acceleration_including_gravity: Vector3Reading,
    /// Gyroscope output.
    pub rotation_rate: RotationRate,
}

impl MotionReading {
    /// Creates a reading with only the gravity-inclusive acceleration set.
    ///
    /// This is the only field gesture detection looks at.
    #[must_use]
    pub fn with_gravity(acceleration_including_gravity: Vector3Reading) -> Self {
        Self {
            acceleration_including_gravity,
            ..Self::default()
        }
    }

    /// Magnitude of the gravity-inclusive acceleration.
    #[must_use]
    pub fn total_acceleration(&self) -> f64 {
        self.acceleration_including_gravity.magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn magnitude_is_euclidean() {
        assert_relative_eq!(Vector3Reading::new(2.0, 3.0, 6.0).magnitude(), 7.0);
        assert_relative_eq!(RotationRate::new(0.0, 3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn total_acceleration_ignores_linear_component() {
        let reading = MotionReading {
            acceleration: Vector3Reading::new(100.0, 0.0, 0.0),
            acceleration_including_gravity: Vector3Reading::new(0.0, 0.0, 9.81),
            rotation_rate: RotationRate::default(),
        };
        assert_relative_eq!(reading.total_acceleration(), 9.81);
    }

    #[test]
    fn default_is_at_rest_without_gravity() {
        let reading = MotionReading::default();
        assert_relative_eq!(reading.total_acceleration(), 0.0);
        assert_eq!(reading.acceleration.to_array(), [0.0, 0.0, 0.0]);
    }
}
