//! Audio cue dispatch for guided exercises.
//!
//! This crate sits between the exercise engine and whatever actually makes
//! sound. The engine says *what* happened; this crate decides *which* notes
//! to play and *when*:
//!
//! - [`AudioSink`] - The backend seam (`play_tone`, `play_note`, readiness)
//! - [`CueDispatcher`] - Threshold-gated proximity tone and [`Cue`] sequences
//! - [`CueScheduler`] - Non-blocking logical timer queue for delayed notes
//! - [`CueConfig`] / [`ToneMapping`] - Thresholds, pitch mapping, sequences
//! - [`RecordingSink`] / [`SilentSink`] - Backends for tests and muted hosts
//!
//! # Timing Model
//!
//! There are no threads and no sleeping. Delayed notes are queued with a
//! due [`Timestamp`](sensor_types::Timestamp) and played when the owner
//! pumps the dispatcher with a later time. Queued notes are never cancelled.
//!
//! # Failure Model
//!
//! Audio is best-effort. An unready or failing sink never surfaces an error
//! to the caller; failures are logged with `tracing` and dropped.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod dispatcher;
mod error;
mod note;
mod scheduler;
mod sink;

pub use config::{CueConfig, NoteStep, ToneMapping, evenly_spaced};
pub use dispatcher::{Cue, CueDispatcher};
pub use error::{AudioError, Result};
pub use note::{Note, NoteValue};
pub use scheduler::{CueScheduler, PendingNote};
pub use sink::{AudioCall, AudioSink, RecordingSink, SilentSink};
