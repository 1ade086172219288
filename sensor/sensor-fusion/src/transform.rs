//! Device attitude: orientation readings as 3D rotations.

use glam::{DQuat, DVec3, EulerRot};
use sensor_types::OrientationReading;

/// The direction a device faces before any rotation is applied.
///
/// Right-handed, Y-up world with the viewer looking down negative Z.
pub const FORWARD: DVec3 = DVec3::NEG_Z;

/// The rotation of a device in world space.
///
/// Built from an [`OrientationReading`] as an intrinsic YXZ Euler rotation:
/// yaw (alpha) about Y, then pitch (beta) about X, then roll (negated gamma)
/// about Z. This matches how a head-mounted phone's orientation maps onto a
/// camera looking down negative Z.
///
/// # Example
///
/// ```
/// use sensor_fusion::DeviceAttitude;
/// use sensor_types::OrientationReading;
///
/// let attitude = DeviceAttitude::from_orientation(&OrientationReading::new(0.0, 90.0, 0.0));
/// let facing = attitude.facing();
/// assert!((facing.y - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceAttitude {
    /// Rotation from device frame to world frame.
    pub rotation: DQuat,
}

impl Default for DeviceAttitude {
    fn default() -> Self {
        Self::identity()
    }
}

impl DeviceAttitude {
    /// The unrotated attitude.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            rotation: DQuat::IDENTITY,
        }
    }

    /// Creates an attitude from yaw, pitch and roll in radians (YXZ order).
    #[must_use]
    pub fn from_euler(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self {
            rotation: DQuat::from_euler(EulerRot::YXZ, yaw, pitch, roll),
        }
    }

    /// Creates an attitude from a device orientation reading.
    #[must_use]
    pub fn from_orientation(orientation: &OrientationReading) -> Self {
        Self::from_euler(
            orientation.alpha_radians(),
            orientation.beta_radians(),
            -orientation.gamma_radians(),
        )
    }

    /// Rotates a device-frame direction into world space.
    #[must_use]
    pub fn apply_direction(&self, direction: DVec3) -> DVec3 {
        self.rotation * direction
    }

    /// The unit vector the device is facing in world space.
    #[must_use]
    pub fn facing(&self) -> DVec3 {
        self.apply_direction(FORWARD)
    }
}

/// The world-space unit vector a device with this orientation is facing.
#[must_use]
pub fn direction_from_orientation(orientation: &OrientationReading) -> DVec3 {
    DeviceAttitude::from_orientation(orientation).facing()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn assert_vec_eq(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn level_device_faces_forward() {
        let direction = direction_from_orientation(&OrientationReading::default());
        assert_vec_eq(direction, DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn yaw_turns_left() {
        let direction = direction_from_orientation(&OrientationReading::new(90.0, 0.0, 0.0));
        assert_vec_eq(direction, DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn pitch_tilts_up() {
        let direction = direction_from_orientation(&OrientationReading::new(0.0, 90.0, 0.0));
        assert_vec_eq(direction, DVec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn roll_keeps_facing() {
        let direction = direction_from_orientation(&OrientationReading::new(0.0, 0.0, 45.0));
        assert_vec_eq(direction, FORWARD);
    }

    #[test]
    fn yaw_applies_before_pitch() {
        // Pitch happens in the yawed frame, so the vertical component is
        // untouched by yaw.
        let direction = direction_from_orientation(&OrientationReading::new(90.0, 45.0, 0.0));
        assert_vec_eq(direction, DVec3::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0));
    }

    #[test]
    fn facing_is_unit_length() {
        for (a, b, g) in [(12.0, -170.0, 33.0), (359.0, 89.0, -90.0), (200.0, 5.0, 0.0)] {
            let direction = direction_from_orientation(&OrientationReading::new(a, b, g));
            assert_relative_eq!(direction.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn identity_attitude() {
        let attitude = DeviceAttitude::default();
        assert_eq!(attitude, DeviceAttitude::identity());
        assert_vec_eq(attitude.facing(), FORWARD);
    }
}
