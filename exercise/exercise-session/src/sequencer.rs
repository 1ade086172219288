//! Cursor over the exercise path.

use exercise_types::{ExercisePath, TargetPosition};

/// Tracks the active target and wraps at the end of the path.
///
/// The cursor is always a valid index: [`ExercisePath`] is never empty.
#[derive(Debug, Clone)]
pub struct PathSequencer {
    path: ExercisePath,
    cursor: usize,
}

impl PathSequencer {
    /// Starts at the first target.
    #[must_use]
    pub const fn new(path: ExercisePath) -> Self {
        Self { path, cursor: 0 }
    }

    /// The path being walked.
    #[must_use]
    pub const fn path(&self) -> &ExercisePath {
        &self.path
    }

    /// Index of the active target.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.cursor
    }

    /// The active target.
    #[must_use]
    pub fn current_target(&self) -> TargetPosition {
        self.path.targets()[self.cursor]
    }

    /// Moves to the next target. Returns `true` if the cursor wrapped back
    /// to the first target, completing a repetition.
    ///
    /// # Example
    ///
    /// ```
    /// use exercise_session::PathSequencer;
    /// use exercise_types::ExercisePath;
    ///
    /// let mut sequencer = PathSequencer::new(ExercisePath::default());
    /// let wraps: Vec<bool> = (0..5).map(|_| sequencer.advance()).collect();
    /// assert_eq!(wraps, [false, false, false, false, true]);
    /// assert_eq!(sequencer.current_index(), 0);
    /// ```
    pub fn advance(&mut self) -> bool {
        self.cursor = (self.cursor + 1) % self.path.len();
        self.cursor == 0
    }

    /// Back to the first target.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
