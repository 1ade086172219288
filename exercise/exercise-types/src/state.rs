//! Session state, the observable snapshot, and session events.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionState {
    /// Waiting for the start gesture.
    #[default]
    Waiting,
    /// Tracking the user through the exercise path.
    Playing,
    /// All repetitions done. Terminal until a new session starts.
    Completed,
}

impl SessionState {
    /// Lowercase name for logs and display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Playing => "playing",
            Self::Completed => "completed",
        }
    }

    /// True for [`SessionState::Completed`].
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a renderer or host may read about a session, after one tick.
///
/// Invariants maintained by the engine:
///
/// - `repetitions <= target_repetitions`
/// - `state == Completed` exactly when `repetitions == target_repetitions`
/// - `accuracy` is `0.0` unless `state == Playing`
/// - `score` never decreases within a session
/// - `current_target_index` is a valid index into the exercise path
///
/// # Example
///
/// ```
/// use exercise_types::{SessionSnapshot, SessionState};
///
/// let snapshot = SessionSnapshot::initial(10);
/// assert_eq!(snapshot.state, SessionState::Waiting);
/// assert_eq!(snapshot.score, 0);
/// assert!(!snapshot.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionSnapshot {
    /// Lifecycle state.
    pub state: SessionState,
    /// Points awarded so far.
    pub score: u32,
    /// Completed traversals of the path.
    pub repetitions: u32,
    /// Repetitions needed to complete the session.
    pub target_repetitions: u32,
    /// Index of the active target.
    pub current_target_index: usize,
    /// Proximity to the active target on the latest tick, in `[0, 1]`.
    pub accuracy: f64,
    /// True briefly after the start gesture, for visual feedback.
    pub shake_feedback: bool,
}

impl SessionSnapshot {
    /// The snapshot of a fresh session.
    #[must_use]
    pub const fn initial(target_repetitions: u32) -> Self {
        Self {
            state: SessionState::Waiting,
            score: 0,
            repetitions: 0,
            target_repetitions,
            current_target_index: 0,
            accuracy: 0.0,
            shake_feedback: false,
        }
    }

    /// True once the session has reached its terminal state.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }

    /// Fraction of repetitions done, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.target_repetitions == 0 {
            return 0.0;
        }
        f64::from(self.repetitions) / f64::from(self.target_repetitions)
    }
}

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionEvent {
    /// The start gesture moved the session from waiting to playing.
    Started,
    /// The active target was reached and points were awarded.
    TargetReached {
        /// Index of the target that was reached.
        index: usize,
        /// Proximity at the moment it was reached.
        proximity: f64,
        /// Points awarded.
        points: u32,
    },
    /// A full traversal of the path finished.
    RepetitionCompleted {
        /// Repetitions completed so far, including this one.
        repetitions: u32,
    },
    /// The final repetition finished.
    Completed {
        /// Score at completion.
        final_score: u32,
    },
}
