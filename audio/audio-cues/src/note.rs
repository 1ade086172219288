//! Note names and note values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pitched note in scientific pitch notation.
///
/// Only the range the cue sequences use is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Note {
    /// C5.
    C5,
    /// D5.
    D5,
    /// E5.
    E5,
    /// F5.
    F5,
    /// G5.
    G5,
    /// A5.
    A5,
    /// B5.
    B5,
    /// C6.
    C6,
}

impl Note {
    /// The note's name, e.g. `"E5"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::C5 => "C5",
            Self::D5 => "D5",
            Self::E5 => "E5",
            Self::F5 => "F5",
            Self::G5 => "G5",
            Self::A5 => "A5",
            Self::B5 => "B5",
            Self::C6 => "C6",
        }
    }

    /// MIDI note number.
    #[must_use]
    pub const fn midi(self) -> u8 {
        match self {
            Self::C5 => 72,
            Self::D5 => 74,
            Self::E5 => 76,
            Self::F5 => 77,
            Self::G5 => 79,
            Self::A5 => 81,
            Self::B5 => 83,
            Self::C6 => 84,
        }
    }

    /// Equal-temperament frequency with A4 at 440 Hz.
    ///
    /// # Example
    ///
    /// ```
    /// use audio_cues::Note;
    ///
    /// assert!((Note::A5.frequency_hz() - 880.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn frequency_hz(self) -> f64 {
        440.0 * 2f64.powf((f64::from(self.midi()) - 69.0) / 12.0)
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How long a note sounds, as a fraction of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoteValue {
    /// Quarter note (`"4n"`).
    Quarter,
    /// Eighth note (`"8n"`).
    #[default]
    Eighth,
    /// Sixteenth note (`"16n"`).
    Sixteenth,
}

impl NoteValue {
    /// Tone-notation string for the value.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::Quarter => "4n",
            Self::Eighth => "8n",
            Self::Sixteenth => "16n",
        }
    }
}
