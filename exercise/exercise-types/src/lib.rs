//! Core types for motion-guided exercise sessions.
//!
//! A session walks the user through an [`ExercisePath`] of spatial targets a
//! fixed number of times. This crate defines the data; the state machine
//! that drives it lives in `exercise-session`.
//!
//! - [`TargetPosition`] / [`ExercisePath`] - Where the user should look
//! - [`SessionState`] - Waiting, playing, completed
//! - [`SessionSnapshot`] - Read-only view of a session after each tick
//! - [`SessionEvent`] - What happened during a tick
//! - [`SessionConfig`] - Thresholds, repetitions, and the path
//! - [`ExerciseError`] - Configuration errors, raised at construction only
//!
//! # Coordinate System
//!
//! Right-handed, Y up, viewer at the origin looking down negative Z.
//! Targets are positions relative to the viewer; only their direction is
//! scored.
//!
//! # Example
//!
//! ```
//! use exercise_types::{SessionConfig, SessionSnapshot};
//!
//! let config = SessionConfig::default();
//! config.validate().unwrap();
//!
//! let snapshot = SessionSnapshot::initial(config.target_repetitions);
//! assert_eq!(snapshot.target_repetitions, 10);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod path;
mod state;

pub use config::SessionConfig;
pub use error::{ExerciseError, Result};
pub use path::{ExercisePath, TargetPosition};
pub use state::{SessionEvent, SessionSnapshot, SessionState};
