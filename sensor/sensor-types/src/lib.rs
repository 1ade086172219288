//! Hardware-agnostic device sensor types.
//!
//! This crate provides the raw sensor data types consumed by the exercise
//! engine, plus the normalisation that turns loosely shaped platform events
//! into complete readings:
//!
//! - [`OrientationReading`] - Absolute device orientation (alpha, beta, gamma)
//! - [`MotionReading`] - Accelerometer and gyroscope sample
//! - [`RawOrientation`] / [`RawMotion`] - Partial events, any field optional
//! - [`SensorLatch`] - Last-value-wins holder for asynchronous events
//! - [`Timestamp`] / [`Duration`] - Logical nanosecond time
//!
//! # Layer 0 Crate
//!
//! No knowledge of sessions, audio, or rendering. It can be used in:
//! - Browser/WASM front ends
//! - Native mobile bindings
//! - Replay and simulation tools
//!
//! # Normalisation
//!
//! Missing, `null`, and non-finite fields become `0.0`. The functions are
//! total: no input shape makes them panic or fail.
//!
//! ```
//! use sensor_types::{motion_from_json, orientation_from_json};
//! use serde_json::json;
//!
//! let orientation = orientation_from_json(&json!({ "alpha": null, "beta": 12.5 }));
//! assert_eq!(orientation.alpha, 0.0);
//! assert_eq!(orientation.beta, 12.5);
//!
//! let motion = motion_from_json(&json!("not an event"));
//! assert_eq!(motion.total_acceleration(), 0.0);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod latch;
mod motion;
mod normalize;
mod orientation;
mod time;

pub use latch::SensorLatch;
pub use motion::{MotionReading, RotationRate, Vector3Reading};
pub use normalize::{
    RawMotion, RawOrientation, RawRotationRate, RawVector, motion_from_json, normalize_motion,
    normalize_orientation, orientation_from_json,
};
pub use orientation::OrientationReading;
pub use time::{Duration, Timestamp};
