//! The session state machine.
//!
//! [`SessionMachine`] owns every piece of mutable session state and applies
//! one tick at a time. It is pure with respect to the outside world: no
//! audio, no callbacks, no clock reads. The engine turns the events it
//! returns into side effects.

use exercise_types::{ExercisePath, SessionConfig, SessionEvent, SessionSnapshot, SessionState};
use sensor_types::{Duration, MotionReading, OrientationReading, Timestamp};
use tracing::{debug, info, trace};

use crate::gesture::ShakeDetector;
use crate::scorer::ProximityScorer;
use crate::sequencer::PathSequencer;

/// What one tick produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// Proximity to the active target, if the session was playing.
    pub proximity: Option<f64>,
    /// Events in the order they happened.
    pub events: Vec<SessionEvent>,
}

/// Waiting → Playing → Completed, driven by sensor ticks.
///
/// # Example
///
/// ```
/// use exercise_session::SessionMachine;
/// use exercise_types::{SessionConfig, SessionEvent, SessionState};
/// use sensor_types::{MotionReading, OrientationReading, Timestamp, Vector3Reading};
///
/// let mut machine = SessionMachine::new(SessionConfig::default());
/// let shake = MotionReading::with_gravity(Vector3Reading::new(0.0, 20.0, 0.0));
///
/// let outcome = machine.step(Timestamp::zero(), &OrientationReading::default(), &shake);
/// assert_eq!(outcome.events, vec![SessionEvent::Started]);
/// assert_eq!(machine.state(), SessionState::Playing);
/// ```
#[derive(Debug, Clone)]
pub struct SessionMachine {
    state: SessionState,
    score: u32,
    repetitions: u32,
    target_repetitions: u32,
    accuracy: f64,
    reach_threshold: f64,
    shake_feedback: Duration,
    started_at: Option<Timestamp>,
    last_tick: Timestamp,
    sequencer: PathSequencer,
    detector: ShakeDetector,
    scorer: ProximityScorer,
}

impl SessionMachine {
    /// Creates a waiting machine.
    ///
    /// The config is taken as given; validate it first.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: SessionState::Waiting,
            score: 0,
            repetitions: 0,
            target_repetitions: config.target_repetitions,
            accuracy: 0.0,
            reach_threshold: config.reach_threshold,
            shake_feedback: config.shake_feedback,
            started_at: None,
            last_tick: Timestamp::zero(),
            sequencer: PathSequencer::new(config.path),
            detector: ShakeDetector::new(config.shake_threshold),
            scorer: ProximityScorer,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The path being walked.
    #[must_use]
    pub const fn path(&self) -> &ExercisePath {
        self.sequencer.path()
    }

    /// Snapshot as of the latest tick.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let shake_feedback = self.started_at.is_some_and(|at| {
            self.last_tick < at.saturating_add(self.shake_feedback)
        });
        SessionSnapshot {
            state: self.state,
            score: self.score,
            repetitions: self.repetitions,
            target_repetitions: self.target_repetitions,
            current_target_index: self.sequencer.current_index(),
            accuracy: if self.state == SessionState::Playing {
                self.accuracy
            } else {
                0.0
            },
            shake_feedback,
        }
    }

    /// Clears progress and returns to [`SessionState::Waiting`].
    ///
    /// The shake detector keeps its arming, so a shake still in progress
    /// does not immediately start the new session. The next start needs a
    /// sample at or below the shake threshold first.
    pub fn reset(&mut self) {
        self.state = SessionState::Waiting;
        self.score = 0;
        self.repetitions = 0;
        self.accuracy = 0.0;
        self.started_at = None;
        self.sequencer.reset();
    }

    /// Applies one tick.
    ///
    /// All effects of a tick happen together: a snapshot taken afterwards
    /// reflects every one of them.
    ///
    /// The tick that carries the start gesture does not score. Once
    /// completed, the machine ignores input until [`reset`](Self::reset).
    pub fn step(
        &mut self,
        now: Timestamp,
        orientation: &OrientationReading,
        motion: &MotionReading,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.state.is_terminal() {
            // Keeps the detector's arming current; the snapshot stays frozen.
            self.detector.detect(motion, self.state);
            return outcome;
        }
        self.last_tick = self.last_tick.max(now);

        if self.detector.detect(motion, self.state) {
            self.start(now);
            outcome.events.push(SessionEvent::Started);
            return outcome;
        }

        if self.state != SessionState::Playing {
            return outcome;
        }

        let index = self.sequencer.current_index();
        let proximity = self
            .scorer
            .proximity(orientation, self.sequencer.current_target());
        self.accuracy = proximity;
        outcome.proximity = Some(proximity);
        trace!(target_index = index, proximity, "tick");

        if proximity <= self.reach_threshold {
            return outcome;
        }

        let points = ProximityScorer::points(proximity);
        self.score = self.score.saturating_add(points);
        outcome.events.push(SessionEvent::TargetReached {
            index,
            proximity,
            points,
        });
        debug!(target_index = index, proximity, points, score = self.score, "target reached");

        if !self.sequencer.advance() {
            return outcome;
        }

        self.repetitions += 1;
        outcome.events.push(SessionEvent::RepetitionCompleted {
            repetitions: self.repetitions,
        });
        info!(
            repetitions = self.repetitions,
            target = self.target_repetitions,
            "repetition complete"
        );

        if self.repetitions >= self.target_repetitions {
            self.state = SessionState::Completed;
            self.accuracy = 0.0;
            // The frozen snapshot never shows start feedback.
            self.started_at = None;
            outcome.events.push(SessionEvent::Completed {
                final_score: self.score,
            });
            info!(final_score = self.score, "session complete");
        }

        outcome
    }

    fn start(&mut self, now: Timestamp) {
        self.reset();
        self.state = SessionState::Playing;
        self.started_at = Some(now);
        self.last_tick = self.last_tick.max(now);
        info!(
            targets = self.sequencer.path().len(),
            repetitions = self.target_repetitions,
            "session started"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use exercise_types::TargetPosition;
    use sensor_types::Vector3Reading;

    fn shake() -> MotionReading {
        MotionReading::with_gravity(Vector3Reading::new(0.0, 20.0, 0.0))
    }

    fn still() -> MotionReading {
        MotionReading::with_gravity(Vector3Reading::new(0.0, 9.81, 0.0))
    }

    fn ahead() -> OrientationReading {
        OrientationReading::default()
    }

    fn single_target(reps: u32) -> SessionMachine {
        let path = ExercisePath::new(vec![TargetPosition::new(0.0, 0.0, -5.0)]).unwrap();
        SessionMachine::new(SessionConfig::with_path(path).with_target_repetitions(reps))
    }

    #[test]
    fn waiting_ignores_orientation() {
        let mut machine = SessionMachine::new(SessionConfig::default());
        let before = machine.snapshot();
        let outcome = machine.step(Timestamp::from_millis(16), &ahead(), &still());
        assert!(outcome.events.is_empty());
        assert_eq!(outcome.proximity, None);
        assert_eq!(machine.snapshot(), before);
    }

    #[test]
    fn start_tick_does_not_score() {
        let mut machine = single_target(3);
        let outcome = machine.step(Timestamp::zero(), &ahead(), &shake());
        assert_eq!(outcome.events, vec![SessionEvent::Started]);
        assert_eq!(machine.snapshot().score, 0);
        assert_relative_eq!(machine.snapshot().accuracy, 0.0);
    }

    #[test]
    fn reaching_awards_rounded_points() {
        let mut machine = single_target(3);
        machine.step(Timestamp::zero(), &ahead(), &shake());
        let outcome = machine.step(Timestamp::from_millis(16), &ahead(), &still());

        assert_eq!(outcome.proximity.map(f64::round), Some(1.0));
        assert!(matches!(
            outcome.events[0],
            SessionEvent::TargetReached { index: 0, points: 100, .. }
        ));
        assert_eq!(
            outcome.events[1],
            SessionEvent::RepetitionCompleted { repetitions: 1 }
        );
        assert_eq!(machine.snapshot().score, 100);
    }

    #[test]
    fn below_threshold_only_updates_accuracy() {
        let mut machine = SessionMachine::new(SessionConfig::default());
        machine.step(Timestamp::zero(), &ahead(), &shake());
        // Facing sideways: proximity 0.5 against any target in front.
        let sideways = OrientationReading::new(90.0, 0.0, 0.0);
        let outcome = machine.step(Timestamp::from_millis(16), &sideways, &still());

        assert!(outcome.events.is_empty());
        let snapshot = machine.snapshot();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.current_target_index, 0);
        assert!(snapshot.accuracy > 0.0 && snapshot.accuracy < 0.8);
    }

    #[test]
    fn threshold_is_strict() {
        let target = TargetPosition::new(1.0, 1.0, -5.0);
        let path = ExercisePath::new(vec![target]).unwrap();
        let p = ProximityScorer.proximity(&ahead(), target);
        let mut machine = SessionMachine::new(SessionConfig::with_path(path).with_reach_threshold(p));
        machine.step(Timestamp::zero(), &ahead(), &shake());

        let outcome = machine.step(Timestamp::from_millis(16), &ahead(), &still());
        assert_eq!(outcome.proximity, Some(p));
        assert!(outcome.events.is_empty());
        assert_eq!(machine.snapshot().score, 0);
    }

    #[test]
    fn completes_after_target_repetitions() {
        let mut machine = single_target(2);
        machine.step(Timestamp::zero(), &ahead(), &shake());
        machine.step(Timestamp::from_millis(16), &ahead(), &still());
        let outcome = machine.step(Timestamp::from_millis(32), &ahead(), &still());

        assert_eq!(
            outcome.events.last(),
            Some(&SessionEvent::Completed { final_score: 200 })
        );
        let snapshot = machine.snapshot();
        assert_eq!(snapshot.state, SessionState::Completed);
        assert_eq!(snapshot.repetitions, 2);
        assert_relative_eq!(snapshot.accuracy, 0.0);
    }

    #[test]
    fn completed_ignores_input() {
        let mut machine = single_target(1);
        machine.step(Timestamp::zero(), &ahead(), &shake());
        machine.step(Timestamp::from_millis(16), &ahead(), &still());
        let before = machine.snapshot();

        for i in 2..10 {
            let outcome = machine.step(Timestamp::from_millis(i * 16), &ahead(), &still());
            assert!(outcome.events.is_empty());
        }
        assert_eq!(machine.snapshot(), before);
    }

    #[test]
    fn shake_feedback_window() {
        let mut machine = SessionMachine::new(SessionConfig::default());
        machine.step(Timestamp::from_millis(1000), &ahead(), &shake());
        assert!(machine.snapshot().shake_feedback);

        machine.step(Timestamp::from_millis(1499), &ahead(), &still());
        assert!(machine.snapshot().shake_feedback);

        machine.step(Timestamp::from_millis(1500), &ahead(), &still());
        assert!(!machine.snapshot().shake_feedback);
    }

    #[test]
    fn completing_inside_feedback_window_clears_it() {
        let mut machine = single_target(1);
        machine.step(Timestamp::zero(), &ahead(), &shake());
        machine.step(Timestamp::from_millis(16), &ahead(), &still());
        assert_eq!(machine.state(), SessionState::Completed);
        assert!(!machine.snapshot().shake_feedback);

        machine.step(Timestamp::from_millis(60_000), &ahead(), &still());
        assert!(!machine.snapshot().shake_feedback);
    }

    #[test]
    fn reset_clears_progress() {
        let mut machine = single_target(3);
        machine.step(Timestamp::zero(), &ahead(), &shake());
        machine.step(Timestamp::from_millis(16), &ahead(), &still());
        machine.reset();
        assert_eq!(machine.snapshot(), SessionSnapshot::initial(3));
    }
}
