//! Targets and the cyclic exercise path.
//!
//! An [`ExercisePath`] is the ordered list of targets that make up one
//! repetition. It is fixed for the lifetime of a session and is never empty.
//!
//! # Example
//!
//! ```
//! use exercise_types::{ExercisePath, TargetPosition};
//!
//! let path = ExercisePath::new(vec![
//!     TargetPosition::new(0.0, 2.0, -5.0),
//!     TargetPosition::new(2.0, 0.0, -5.0),
//! ]).unwrap();
//! assert_eq!(path.len(), 2);
//!
//! assert!(ExercisePath::new(vec![]).is_err());
//! ```

use glam::DVec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ExerciseError, Result};

/// A target position in world space, relative to the viewer.
///
/// Only its direction matters for scoring; the distance places the marker
/// in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetPosition {
    /// X (right).
    pub x: f64,
    /// Y (up).
    pub y: f64,
    /// Z (negative is in front of the viewer).
    pub z: f64,
}

impl TargetPosition {
    /// Creates a target.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The target as a `glam` vector.
    #[must_use]
    pub const fn to_vec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Unit vector from the viewer toward the target.
    ///
    /// Returns `None` for a zero or non-finite position.
    #[must_use]
    pub fn direction(self) -> Option<DVec3> {
        self.to_vec3().try_normalize()
    }
}

impl From<[f64; 3]> for TargetPosition {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// The ordered, cyclic sequence of targets for one repetition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<TargetPosition>", into = "Vec<TargetPosition>")
)]
pub struct ExercisePath {
    targets: Vec<TargetPosition>,
}

impl ExercisePath {
    /// Creates a path.
    ///
    /// # Errors
    ///
    /// Returns [`ExerciseError::EmptyPath`] for an empty list, and
    /// [`ExerciseError::InvalidTarget`] for a target with no direction (zero
    /// length, `NaN`, or infinite components).
    pub fn new(targets: Vec<TargetPosition>) -> Result<Self> {
        if targets.is_empty() {
            return Err(ExerciseError::EmptyPath);
        }
        for (index, target) in targets.iter().enumerate() {
            if target.direction().is_none() {
                return Err(ExerciseError::invalid_target(
                    index,
                    format!("{target:?} has no direction"),
                ));
            }
        }
        Ok(Self { targets })
    }

    /// Number of targets in one repetition. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// The target at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<TargetPosition> {
        self.targets.get(index).copied()
    }

    /// All targets in order.
    #[must_use]
    pub fn targets(&self) -> &[TargetPosition] {
        &self.targets
    }

    /// Iterates over the targets in order.
    pub fn iter(&self) -> impl Iterator<Item = &TargetPosition> {
        self.targets.iter()
    }
}

impl Default for ExercisePath {
    /// Up, right, down, left, and back up: a head circle at five units.
    fn default() -> Self {
        Self {
            targets: vec![
                TargetPosition::new(0.0, 2.0, -5.0),
                TargetPosition::new(2.0, 0.0, -5.0),
                TargetPosition::new(0.0, -2.0, -5.0),
                TargetPosition::new(-2.0, 0.0, -5.0),
                TargetPosition::new(0.0, 2.0, -5.0),
            ],
        }
    }
}

impl TryFrom<Vec<TargetPosition>> for ExercisePath {
    type Error = ExerciseError;

    fn try_from(targets: Vec<TargetPosition>) -> Result<Self> {
        Self::new(targets)
    }
}

impl From<ExercisePath> for Vec<TargetPosition> {
    fn from(path: ExercisePath) -> Self {
        path.targets
    }
}
