//! The audio backend seam.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{AudioError, Result};
use crate::note::{Note, NoteValue};

/// A tone-generation backend.
///
/// Implementations wrap whatever actually makes sound (a Web Audio synth, a
/// native mixer, a log). Every call is fire-and-forget: the dispatcher never
/// waits on a result and treats errors as "this cue was not heard".
pub trait AudioSink {
    /// Whether the backend can accept calls right now.
    fn is_ready(&self) -> bool;

    /// Plays a short tone at the given pitch and loudness.
    ///
    /// # Errors
    ///
    /// Backend-specific; the dispatcher logs and discards them.
    fn play_tone(&mut self, frequency_hz: f64, volume_db: f64) -> Result<()>;

    /// Plays a named note for the given note value.
    ///
    /// # Errors
    ///
    /// Backend-specific; the dispatcher logs and discards them.
    fn play_note(&mut self, note: Note, value: NoteValue) -> Result<()>;
}

/// A backend that is never ready. Used when a host has no audio output.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn is_ready(&self) -> bool {
        false
    }

    fn play_tone(&mut self, _frequency_hz: f64, _volume_db: f64) -> Result<()> {
        Err(AudioError::NotReady)
    }

    fn play_note(&mut self, _note: Note, _value: NoteValue) -> Result<()> {
        Err(AudioError::NotReady)
    }
}

/// A call received by a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCall {
    /// A proximity tone.
    Tone {
        /// Pitch in Hz.
        frequency_hz: f64,
        /// Loudness in dB.
        volume_db: f64,
    },
    /// A sequence note.
    Note {
        /// Pitch.
        note: Note,
        /// Length.
        value: NoteValue,
    },
}

/// A backend that records every successful call.
///
/// Clones share the same log and switches, so a host (or test) can keep a
/// handle after moving the sink into a dispatcher.
///
/// # Example
///
/// ```
/// use audio_cues::{AudioCall, AudioSink, Note, NoteValue, RecordingSink};
///
/// let sink = RecordingSink::new();
/// let mut boxed: Box<dyn AudioSink> = Box::new(sink.clone());
/// boxed.play_note(Note::C5, NoteValue::Quarter).unwrap();
/// assert_eq!(sink.calls(), vec![AudioCall::Note { note: Note::C5, value: NoteValue::Quarter }]);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingSink {
    calls: Rc<RefCell<Vec<AudioCall>>>,
    ready: Rc<Cell<bool>>,
    failing: Rc<Cell<bool>>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSink {
    /// Creates a ready, non-failing sink with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            ready: Rc::new(Cell::new(true)),
            failing: Rc::new(Cell::new(false)),
        }
    }

    /// Sets whether the sink reports itself ready.
    pub fn set_ready(&self, ready: bool) {
        self.ready.set(ready);
    }

    /// Makes every subsequent call fail with a backend error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// A copy of the recorded calls.
    #[must_use]
    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.borrow().clone()
    }

    /// Only the recorded notes, in order.
    #[must_use]
    pub fn notes(&self) -> Vec<Note> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                AudioCall::Note { note, .. } => Some(*note),
                AudioCall::Tone { .. } => None,
            })
            .collect()
    }

    /// Number of recorded tones.
    #[must_use]
    pub fn tone_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, AudioCall::Tone { .. }))
            .count()
    }

    /// Empties the log.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: AudioCall) -> Result<()> {
        if !self.ready.get() {
            return Err(AudioError::NotReady);
        }
        if self.failing.get() {
            return Err(AudioError::backend("injected failure"));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl AudioSink for RecordingSink {
    fn is_ready(&self) -> bool {
        self.ready.get()
    }

    fn play_tone(&mut self, frequency_hz: f64, volume_db: f64) -> Result<()> {
        self.record(AudioCall::Tone {
            frequency_hz,
            volume_db,
        })
    }

    fn play_note(&mut self, note: Note, value: NoteValue) -> Result<()> {
        self.record(AudioCall::Note { note, value })
    }
}
