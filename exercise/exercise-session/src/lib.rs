//! Motion-guided exercise session engine.
//!
//! Turns a stream of device orientation and motion readings into a guided
//! exercise: a shake starts the session, the user points the device at each
//! target of an [`ExercisePath`](exercise_types::ExercisePath) in turn, and
//! every target reached scores points. Audio cues accompany each step.
//!
//! # Components
//!
//! - [`ShakeDetector`] - Recognises the start gesture
//! - [`ProximityScorer`] - How closely the device points at a target
//! - [`PathSequencer`] - Which target is active
//! - [`SessionMachine`] - Waiting → Playing → Completed, one tick at a time
//! - [`SessionEngine`] - Ties the machine to audio, a clock, and the host
//!
//! # Host Integration
//!
//! The host owns the frame loop. Once per frame it calls
//! [`SessionEngine::on_tick`] with the latest readings and renders the
//! returned [`SessionSnapshot`](exercise_types::SessionSnapshot). Milestones
//! arrive through a [`SessionObserver`].
//!
//! # Example
//!
//! ```
//! use audio_cues::{CueConfig, RecordingSink};
//! use exercise_session::{ManualClock, SessionEngine};
//! use exercise_types::{SessionConfig, SessionState};
//! use sensor_types::{MotionReading, OrientationReading, Vector3Reading};
//!
//! let sink = RecordingSink::new();
//! let mut engine = SessionEngine::new(
//!     SessionConfig::default(),
//!     CueConfig::default(),
//!     Box::new(sink.clone()),
//!     Box::new(ManualClock::new()),
//! )
//! .unwrap();
//!
//! let rest = MotionReading::with_gravity(Vector3Reading::new(0.0, 9.81, 0.0));
//! let shake = MotionReading::with_gravity(Vector3Reading::new(0.0, 20.0, 0.0));
//!
//! assert_eq!(engine.on_tick(&OrientationReading::default(), &rest).state, SessionState::Waiting);
//! assert_eq!(engine.on_tick(&OrientationReading::default(), &shake).state, SessionState::Playing);
//! assert!(!sink.notes().is_empty());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod clock;
mod engine;
mod error;
mod gesture;
mod machine;
mod observer;
mod scorer;
mod sequencer;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use engine::SessionEngine;
pub use error::{EngineError, Result};
pub use gesture::ShakeDetector;
pub use machine::{SessionMachine, TickOutcome};
pub use observer::{NoopObserver, OnComplete, SessionObserver};
pub use scorer::ProximityScorer;
pub use sequencer::PathSequencer;
