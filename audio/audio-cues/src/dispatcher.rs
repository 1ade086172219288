//! Maps cue triggers onto an audio sink.

use sensor_types::Timestamp;
use tracing::{debug, trace, warn};

use crate::config::{CueConfig, NoteStep};
use crate::error::Result;
use crate::scheduler::CueScheduler;
use crate::sink::AudioSink;

/// A discrete audio cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The start gesture was recognised.
    Start,
    /// A repetition was completed.
    Success,
    /// The session was completed.
    Completion,
}

impl Cue {
    /// Short lowercase name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Success => "success",
            Self::Completion => "completion",
        }
    }
}

/// Decides which sounds to make and hands them to an [`AudioSink`].
///
/// Two kinds of output:
///
/// - A continuous proximity tone, gated on `tone_threshold`, with pitch and
///   volume from the [`ToneMapping`](crate::ToneMapping).
/// - Multi-note [`Cue`] sequences. Each note is queued on a
///   [`CueScheduler`] at `now + offset`; notes already due are played at
///   once and the rest on later calls to [`pump`](Self::pump).
///
/// Nothing the sink does can fail the caller. An unready sink is skipped, and
/// sink errors are logged and dropped.
///
/// # Example
///
/// ```
/// use audio_cues::{Cue, CueConfig, CueDispatcher, Note, RecordingSink};
/// use sensor_types::Timestamp;
///
/// let sink = RecordingSink::new();
/// let mut cues = CueDispatcher::new(Box::new(sink.clone()), CueConfig::default()).unwrap();
///
/// cues.cue(Cue::Success, Timestamp::from_millis(1_000));
/// assert_eq!(sink.notes(), vec![Note::C5]);
///
/// cues.pump(Timestamp::from_millis(1_300));
/// assert_eq!(sink.notes(), vec![Note::C5, Note::E5, Note::G5]);
/// ```
pub struct CueDispatcher {
    sink: Box<dyn AudioSink>,
    config: CueConfig,
    scheduler: CueScheduler,
}

impl std::fmt::Debug for CueDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CueDispatcher")
            .field("config", &self.config)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

impl CueDispatcher {
    /// Creates a dispatcher.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`CueConfig::validate`].
    pub fn new(sink: Box<dyn AudioSink>, config: CueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sink,
            config,
            scheduler: CueScheduler::default(),
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CueConfig {
        &self.config
    }

    /// Whether the sink currently accepts calls.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.sink.is_ready()
    }

    /// Number of notes waiting for their due time.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.scheduler.len()
    }

    /// Plays the proximity tone if `proximity` exceeds the tone threshold.
    ///
    /// Returns `true` if the sink accepted the tone.
    pub fn proximity_tone(&mut self, proximity: f64) -> bool {
        if proximity <= self.config.tone_threshold {
            return false;
        }
        if !self.sink.is_ready() {
            trace!(proximity, "audio not ready, proximity tone skipped");
            return false;
        }

        let frequency_hz = self.config.tone.frequency_hz(proximity);
        let volume_db = self.config.tone.volume_db(proximity);
        match self.sink.play_tone(frequency_hz, volume_db) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, frequency_hz, "proximity tone failed");
                false
            }
        }
    }

    /// Triggers a cue sequence at `now`.
    ///
    /// Notes with a zero offset (and anything else already due) play before
    /// this returns. Does nothing if the sink is not ready.
    pub fn cue(&mut self, cue: Cue, now: Timestamp) {
        if !self.sink.is_ready() {
            debug!(cue = cue.name(), "audio not ready, cue skipped");
            return;
        }

        let steps: &[NoteStep] = match cue {
            Cue::Start => &self.config.start,
            Cue::Success => &self.config.success,
            Cue::Completion => &self.config.completion,
        };
        debug!(cue = cue.name(), notes = steps.len(), "cue scheduled");

        for step in steps {
            let due = now.saturating_add(step.offset);
            if let Some(dropped) = self.scheduler.schedule(due, step.note, step.value) {
                warn!(note = %dropped.note, "cue queue full, dropped oldest note");
            }
        }
        self.pump(now);
    }

    /// Plays every queued note due at or before `now`.
    ///
    /// Returns how many notes the sink accepted. Due notes are consumed even
    /// if the sink is unready or rejects them.
    pub fn pump(&mut self, now: Timestamp) -> usize {
        let mut played = 0;
        while let Some(pending) = self.scheduler.pop_due(now) {
            if !self.sink.is_ready() {
                debug!(note = %pending.note, "audio not ready, note skipped");
                continue;
            }
            match self.sink.play_note(pending.note, pending.value) {
                Ok(()) => played += 1,
                Err(err) => warn!(error = %err, note = %pending.note, "note failed"),
            }
        }
        played
    }
}
