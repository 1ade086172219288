//! An audio sink that logs what it would play.

use audio_cues::{AudioSink, Note, NoteValue, Result};
use tracing::{debug, info};

/// Writes every tone and note to the log instead of a speaker.
#[derive(Debug, Default)]
pub struct LoggingSink {
    tones: u64,
}

impl LoggingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for LoggingSink {
    fn is_ready(&self) -> bool {
        true
    }

    fn play_tone(&mut self, frequency_hz: f64, volume_db: f64) -> Result<()> {
        self.tones += 1;
        debug!(frequency_hz, volume_db, count = self.tones, "tone");
        Ok(())
    }

    fn play_note(&mut self, note: Note, value: NoteValue) -> Result<()> {
        info!(
            note = %note,
            frequency_hz = note.frequency_hz(),
            value = value.notation(),
            "note"
        );
        Ok(())
    }
}
