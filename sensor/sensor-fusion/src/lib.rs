//! Orientation math for the exercise engine.
//!
//! This crate turns device orientation readings into world-space facing
//! directions and scores how closely a facing direction points at a target:
//!
//! # Attitude
//!
//! - [`DeviceAttitude`] - Device rotation built from alpha/beta/gamma (YXZ order)
//! - [`direction_from_orientation`] - Unit facing vector for a reading
//! - [`FORWARD`] - The unrotated facing direction, negative Z
//!
//! # Proximity
//!
//! - [`proximity`] - Cosine of the angular separation, mapped to `[0, 1]`
//!
//! # Layer 0 Crate
//!
//! Pure functions over `sensor-types` readings and `glam` vectors. No state,
//! no allocation, no knowledge of sessions.
//!
//! # Example
//!
//! ```
//! use glam::DVec3;
//! use sensor_fusion::{direction_from_orientation, proximity};
//! use sensor_types::OrientationReading;
//!
//! let facing = direction_from_orientation(&OrientationReading::default());
//! let score = proximity(facing, DVec3::new(0.0, 0.0, -5.0));
//! assert!(score > 0.999);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod proximity;
mod transform;

pub use proximity::proximity;
pub use transform::{DeviceAttitude, FORWARD, direction_from_orientation};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{DeviceAttitude, FORWARD, direction_from_orientation, proximity};
}
