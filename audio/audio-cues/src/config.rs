//! Cue configuration: proximity tone mapping and note sequences.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sensor_types::Duration;

use crate::error::{AudioError, Result};
use crate::note::{Note, NoteValue};
use crate::scheduler::CueScheduler;

/// Linear mapping from proximity to tone pitch and loudness.
///
/// Proximity `0.0` maps to the `min_*` ends, `1.0` to the `max_*` ends.
/// Default: 200–800 Hz, −20–0 dB.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ToneMapping {
    /// Frequency at proximity 0, in Hz.
    pub min_frequency_hz: f64,
    /// Frequency at proximity 1, in Hz.
    pub max_frequency_hz: f64,
    /// Volume at proximity 0, in dB.
    pub min_volume_db: f64,
    /// Volume at proximity 1, in dB.
    pub max_volume_db: f64,
}

impl Default for ToneMapping {
    fn default() -> Self {
        Self {
            min_frequency_hz: 200.0,
            max_frequency_hz: 800.0,
            min_volume_db: -20.0,
            max_volume_db: 0.0,
        }
    }
}

impl ToneMapping {
    /// Tone frequency for a proximity (clamped to `[0, 1]`).
    ///
    /// # Example
    ///
    /// ```
    /// use audio_cues::ToneMapping;
    ///
    /// let mapping = ToneMapping::default();
    /// assert!((mapping.frequency_hz(0.5) - 500.0).abs() < 1e-9);
    /// assert!((mapping.volume_db(0.5) + 10.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn frequency_hz(&self, proximity: f64) -> f64 {
        let p = proximity.clamp(0.0, 1.0);
        self.min_frequency_hz + p * (self.max_frequency_hz - self.min_frequency_hz)
    }

    /// Tone volume for a proximity (clamped to `[0, 1]`).
    #[must_use]
    pub fn volume_db(&self, proximity: f64) -> f64 {
        let p = proximity.clamp(0.0, 1.0);
        self.min_volume_db + p * (self.max_volume_db - self.min_volume_db)
    }
}

/// One note of a cue sequence, played `offset` after the cue fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoteStep {
    /// Pitch.
    pub note: Note,
    /// Length.
    pub value: NoteValue,
    /// Delay from the cue trigger.
    pub offset: Duration,
}

impl NoteStep {
    /// Creates a step.
    #[must_use]
    pub const fn new(note: Note, value: NoteValue, offset: Duration) -> Self {
        Self {
            note,
            value,
            offset,
        }
    }
}

/// Builds evenly spaced steps, the first sounding immediately.
#[must_use]
pub fn evenly_spaced(notes: &[Note], value: NoteValue, spacing: Duration) -> Vec<NoteStep> {
    (0u64..)
        .zip(notes)
        .map(|(i, &note)| NoteStep::new(note, value, spacing.saturating_mul(i)))
        .collect()
}

/// Configuration for the cue dispatcher.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CueConfig {
    /// Proximity above which the continuous tone sounds. Default: 0.3
    pub tone_threshold: f64,

    /// Proximity to pitch/volume mapping.
    pub tone: ToneMapping,

    /// Sequence for the session start gesture. Default: C5 E5 G5 quarter
    /// notes at 0, 150 and 300 ms.
    pub start: Vec<NoteStep>,

    /// Sequence for a completed repetition. Default: same as `start`.
    pub success: Vec<NoteStep>,

    /// Sequence for a completed session. Default: C5 D5 E5 F5 G5 eighth
    /// notes 100 ms apart.
    pub completion: Vec<NoteStep>,
}

impl Default for CueConfig {
    fn default() -> Self {
        let chime = evenly_spaced(
            &[Note::C5, Note::E5, Note::G5],
            NoteValue::Quarter,
            Duration::from_millis(150),
        );
        Self {
            tone_threshold: 0.3,
            tone: ToneMapping::default(),
            start: chime.clone(),
            success: chime,
            completion: evenly_spaced(
                &[Note::C5, Note::D5, Note::E5, Note::F5, Note::G5],
                NoteValue::Eighth,
                Duration::from_millis(100),
            ),
        }
    }
}

impl CueConfig {
    /// Set the tone threshold.
    #[must_use]
    pub fn with_tone_threshold(mut self, threshold: f64) -> Self {
        self.tone_threshold = threshold;
        self
    }

    /// Set the tone mapping.
    #[must_use]
    pub fn with_tone(mut self, tone: ToneMapping) -> Self {
        self.tone = tone;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::InvalidConfig`] if the tone threshold is not a
    /// finite value in `[0, 1]`, the tone mapping has non-finite ends, or the
    /// three cue sequences together hold more notes than
    /// [`CueScheduler::DEFAULT_CAPACITY`]. A start chime still sounding when
    /// the final repetition triggers success and completion on one tick must
    /// fit in the queue without evicting anything.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.tone_threshold) {
            return Err(AudioError::invalid_config(format!(
                "tone threshold must be in [0, 1], got {}",
                self.tone_threshold
            )));
        }
        let ends = [
            self.tone.min_frequency_hz,
            self.tone.max_frequency_hz,
            self.tone.min_volume_db,
            self.tone.max_volume_db,
        ];
        if ends.iter().any(|v| !v.is_finite()) {
            return Err(AudioError::invalid_config("tone mapping must be finite"));
        }
        if self.tone.min_frequency_hz <= 0.0 || self.tone.max_frequency_hz <= 0.0 {
            return Err(AudioError::invalid_config("tone frequencies must be positive"));
        }
        let notes = self.start.len() + self.success.len() + self.completion.len();
        if notes > CueScheduler::DEFAULT_CAPACITY {
            return Err(AudioError::invalid_config(format!(
                "cue sequences hold {notes} notes, at most {} fit the queue",
                CueScheduler::DEFAULT_CAPACITY
            )));
        }
        Ok(())
    }
}
