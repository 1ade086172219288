//! Device orientation readings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute device orientation as three Euler angles in degrees.
///
/// The angles follow the device-orientation convention used by mobile
/// browsers and most phone sensor APIs:
///
/// - `alpha`: rotation about the vertical axis (yaw), in `[0, 360)`
/// - `beta`: front-to-back tilt (pitch), in `[-180, 180]`
/// - `gamma`: left-to-right tilt (roll), in `[-90, 90]`
///
/// A reading is an immutable snapshot. Build complete readings from partial
/// sensor data with [`normalize_orientation`](crate::normalize_orientation).
///
/// # Example
///
/// ```
/// use sensor_types::OrientationReading;
///
/// let level = OrientationReading::default();
/// assert_eq!(level, OrientationReading::new(0.0, 0.0, 0.0));
/// assert!((OrientationReading::new(90.0, 0.0, 0.0).alpha_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationReading {
    /// Yaw in degrees.
    pub alpha: f64,
    /// Pitch in degrees.
    pub beta: f64,
    /// Roll in degrees.
    pub gamma: f64,
}

impl OrientationReading {
    /// Creates a reading from the three angles in degrees.
    #[must_use]
    pub const fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Yaw in radians.
    #[must_use]
    pub fn alpha_radians(&self) -> f64 {
        self.alpha.to_radians()
    }

    /// Pitch in radians.
    #[must_use]
    pub fn beta_radians(&self) -> f64 {
        self.beta.to_radians()
    }

    /// Roll in radians.
    #[must_use]
    pub fn gamma_radians(&self) -> f64 {
        self.gamma.to_radians()
    }
}
