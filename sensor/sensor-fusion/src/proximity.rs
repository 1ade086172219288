//! Angular proximity between a facing direction and a target.

use glam::DVec3;

/// Maps the angle between `direction` and the direction of `target` onto
/// `[0, 1]`.
///
/// `target` is a position relative to the viewer and need not be unit
/// length. The result is `(cos θ + 1) / 2`: `1.0` when aligned, `0.5` when
/// orthogonal, `0.0` when opposed. It is monotonic in the angle and needs no
/// inverse trigonometry. `direction` is expected to be unit length.
///
/// A zero `target` has no direction and scores as orthogonal.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use sensor_fusion::proximity;
///
/// let forward = DVec3::NEG_Z;
/// assert!((proximity(forward, DVec3::new(0.0, 0.0, -5.0)) - 1.0).abs() < 1e-12);
/// assert!(proximity(forward, DVec3::new(0.0, 0.0, 5.0)).abs() < 1e-12);
/// ```
#[must_use]
pub fn proximity(direction: DVec3, target: DVec3) -> f64 {
    let dot = direction.dot(target.normalize_or_zero());
    ((dot + 1.0) / 2.0).clamp(0.0, 1.0)
}
