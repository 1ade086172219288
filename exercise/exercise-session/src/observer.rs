//! Host notifications.

/// Receives session milestones.
///
/// All methods default to no-ops, so hosts implement only what they use.
/// Calls happen synchronously inside the tick that caused them, after the
/// snapshot for that tick is final.
pub trait SessionObserver {
    /// The score changed.
    fn on_score_change(&mut self, _score: u32) {}

    /// A repetition finished. `repetitions` includes it.
    fn on_repetition_complete(&mut self, _repetitions: u32) {}

    /// The final repetition finished. Called once per session.
    fn on_session_complete(&mut self, _final_score: u32) {}
}

/// Ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Adapts a closure into a completion-only observer.
///
/// # Example
///
/// ```
/// use exercise_session::{OnComplete, SessionObserver};
///
/// let mut seen = None;
/// {
///     let mut observer = OnComplete(|score| seen = Some(score));
///     observer.on_session_complete(420);
/// }
/// assert_eq!(seen, Some(420));
/// ```
pub struct OnComplete<F>(pub F);

impl<F: FnMut(u32)> SessionObserver for OnComplete<F> {
    fn on_session_complete(&mut self, final_score: u32) {
        (self.0)(final_score);
    }
}

impl<F> std::fmt::Debug for OnComplete<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnComplete").finish_non_exhaustive()
    }
}
