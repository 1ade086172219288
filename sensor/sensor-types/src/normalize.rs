//! Normalisation of partial sensor events into complete readings.
//!
//! Platform sensor events are loosely shaped: any field may be missing,
//! `null`, or `NaN` (devices without a gyroscope report no rotation rate,
//! desktop browsers report nothing at all). Everything here is total: every
//! input, however malformed, produces a fully populated reading with `0.0`
//! substituted for each unusable field.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{MotionReading, OrientationReading, RotationRate, Vector3Reading};

/// An orientation event as delivered by the platform, any field optional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RawOrientation {
    /// Yaw in degrees.
    pub alpha: Option<f64>,
    /// Pitch in degrees.
    pub beta: Option<f64>,
    /// Roll in degrees.
    pub gamma: Option<f64>,
}

/// A raw three-axis vector, any component optional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RawVector {
    /// X component.
    pub x: Option<f64>,
    /// Y component.
    pub y: Option<f64>,
    /// Z component.
    pub z: Option<f64>,
}

/// A raw rotation rate, any component optional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RawRotationRate {
    /// Rate about the vertical axis.
    pub alpha: Option<f64>,
    /// Rate about the lateral axis.
    pub beta: Option<f64>,
    /// Rate about the longitudinal axis.
    pub gamma: Option<f64>,
}

/// A motion event as delivered by the platform, any group or field optional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct RawMotion {
    /// Acceleration with gravity removed.
    pub acceleration: Option<RawVector>,
    /// Raw accelerometer output.
    pub acceleration_including_gravity: Option<RawVector>,
    /// Gyroscope output.
    pub rotation_rate: Option<RawRotationRate>,
}

/// Replaces a missing or non-finite value with zero.
fn field(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Builds a complete orientation reading from a partial event.
///
/// Alpha is wrapped into `[0, 360)`, which leaves the described rotation
/// unchanged.
///
/// # Example
///
/// ```
/// use sensor_types::{normalize_orientation, RawOrientation};
///
/// let raw = RawOrientation { alpha: Some(-90.0), beta: None, gamma: Some(f64::NAN) };
/// let reading = normalize_orientation(&raw);
/// assert_eq!((reading.alpha, reading.beta, reading.gamma), (270.0, 0.0, 0.0));
/// ```
#[must_use]
pub fn normalize_orientation(raw: &RawOrientation) -> OrientationReading {
    OrientationReading {
        alpha: field(raw.alpha).rem_euclid(360.0),
        beta: field(raw.beta),
        gamma: field(raw.gamma),
    }
}

/// Builds a complete motion reading from a partial event.
#[must_use]
pub fn normalize_motion(raw: &RawMotion) -> MotionReading {
    MotionReading {
        acceleration: vector(raw.acceleration.as_ref()),
        acceleration_including_gravity: vector(raw.acceleration_including_gravity.as_ref()),
        rotation_rate: raw
            .rotation_rate
            .map(|r| RotationRate::new(field(r.alpha), field(r.beta), field(r.gamma)))
            .unwrap_or_default(),
    }
}

fn vector(raw: Option<&RawVector>) -> Vector3Reading {
    raw.map(|v| Vector3Reading::new(field(v.x), field(v.y), field(v.z)))
        .unwrap_or_default()
}

/// Reads a numeric field from an arbitrary JSON value.
///
/// Anything that is not a JSON number (strings, booleans, nested objects)
/// counts as missing.
fn json_number(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}

/// Reads a nested object under either of two spellings of its key.
fn json_group<'a>(value: &'a Value, camel: &str, snake: &str) -> Option<&'a Value> {
    value
        .get(camel)
        .or_else(|| value.get(snake))
        .filter(|v| v.is_object())
}

fn json_vector(value: Option<&Value>) -> Option<RawVector> {
    value.map(|v| RawVector {
        x: json_number(v, "x"),
        y: json_number(v, "y"),
        z: json_number(v, "z"),
    })
}

/// Normalises an orientation event of any JSON shape.
///
/// Non-object values yield the all-zero reading.
#[must_use]
pub fn orientation_from_json(value: &Value) -> OrientationReading {
    normalize_orientation(&RawOrientation {
        alpha: json_number(value, "alpha"),
        beta: json_number(value, "beta"),
        gamma: json_number(value, "gamma"),
    })
}

/// Normalises a motion event of any JSON shape.
///
/// Accepts both `accelerationIncludingGravity` and
/// `acceleration_including_gravity` key spellings.
#[must_use]
pub fn motion_from_json(value: &Value) -> MotionReading {
    let rotation_rate = json_group(value, "rotationRate", "rotation_rate").map(|v| RawRotationRate {
        alpha: json_number(v, "alpha"),
        beta: json_number(v, "beta"),
        gamma: json_number(v, "gamma"),
    });

    normalize_motion(&RawMotion {
        acceleration: json_vector(json_group(value, "acceleration", "acceleration")),
        acceleration_including_gravity: json_vector(json_group(
            value,
            "accelerationIncludingGravity",
            "acceleration_including_gravity",
        )),
        rotation_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn empty_orientation_is_zero() {
        assert_eq!(
            normalize_orientation(&RawOrientation::default()),
            OrientationReading::default()
        );
    }

    #[test]
    fn orientation_keeps_present_fields() {
        let raw = RawOrientation {
            alpha: Some(45.0),
            beta: Some(-30.0),
            gamma: None,
        };
        let reading = normalize_orientation(&raw);
        assert_relative_eq!(reading.alpha, 45.0);
        assert_relative_eq!(reading.beta, -30.0);
        assert_relative_eq!(reading.gamma, 0.0);
    }

    #[test]
    fn alpha_is_wrapped() {
        let raw = RawOrientation {
            alpha: Some(360.0),
            ..RawOrientation::default()
        };
        assert_relative_eq!(normalize_orientation(&raw).alpha, 0.0);

        let raw = RawOrientation {
            alpha: Some(725.0),
            ..RawOrientation::default()
        };
        assert_relative_eq!(normalize_orientation(&raw).alpha, 5.0);
    }

    #[test]
    fn non_finite_values_become_zero() {
        let raw = RawMotion {
            acceleration: Some(RawVector {
                x: Some(f64::INFINITY),
                y: Some(1.0),
                z: Some(f64::NAN),
            }),
            acceleration_including_gravity: None,
            rotation_rate: Some(RawRotationRate {
                alpha: Some(f64::NEG_INFINITY),
                beta: None,
                gamma: Some(2.0),
            }),
        };
        let reading = normalize_motion(&raw);
        assert_eq!(reading.acceleration, Vector3Reading::new(0.0, 1.0, 0.0));
        assert_eq!(reading.acceleration_including_gravity, Vector3Reading::default());
        assert_eq!(reading.rotation_rate, RotationRate::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn json_motion_camel_case() {
        let value = json!({
            "acceleration": { "x": 0.1, "y": null },
            "accelerationIncludingGravity": { "x": 12.0, "y": 16.0, "z": 0.0 },
            "rotationRate": { "alpha": 5.0, "beta": "fast", "gamma": 1.0 }
        });
        let reading = motion_from_json(&value);
        assert_relative_eq!(reading.acceleration.x, 0.1);
        assert_relative_eq!(reading.acceleration.y, 0.0);
        assert_relative_eq!(reading.total_acceleration(), 20.0);
        assert_eq!(reading.rotation_rate, RotationRate::new(5.0, 0.0, 1.0));
    }

    #[test]
    fn json_motion_snake_case() {
        let value = json!({
            "acceleration_including_gravity": { "x": 0.0, "y": 0.0, "z": 9.81 }
        });
        assert_relative_eq!(motion_from_json(&value).total_acceleration(), 9.81);
    }

    #[test]
    fn json_garbage_never_panics() {
        for value in [
            json!(null),
            json!(42),
            json!("alpha"),
            json!([1, 2, 3]),
            json!({ "alpha": { "nested": true } }),
            json!({ "accelerationIncludingGravity": 7 }),
        ] {
            assert_eq!(orientation_from_json(&value), OrientationReading::default());
            assert_eq!(motion_from_json(&value), MotionReading::default());
        }
    }

    #[test]
    fn json_orientation() {
        let reading = orientation_from_json(&json!({ "alpha": 10, "beta": 20.5, "gamma": -5 }));
        assert_eq!(reading, OrientationReading::new(10.0, 20.5, -5.0));
    }
}
