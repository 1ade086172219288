//! The session engine: state machine, audio, and host callbacks together.

use audio_cues::{AudioSink, Cue, CueConfig, CueDispatcher};
use exercise_types::{ExercisePath, SessionConfig, SessionEvent, SessionSnapshot};
use sensor_types::{MotionReading, OrientationReading, RawMotion, RawOrientation, SensorLatch};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::Result;
use crate::machine::{SessionMachine, TickOutcome};
use crate::observer::{NoopObserver, SessionObserver};

/// Drives one exercise session from sensor input to snapshots, sound, and
/// host notifications.
///
/// The host calls [`on_tick`](Self::on_tick) once per frame with the latest
/// readings (or feeds raw events through `ingest_*` and calls
/// [`tick`](Self::tick)). Each tick:
///
/// 1. Advances the state machine.
/// 2. Plays the proximity tone while playing.
/// 3. Schedules cues for start, repetition, and completion.
/// 4. Notifies the observer.
/// 5. Plays any cue notes that have come due.
///
/// Audio never blocks or fails a tick: an unready or failing sink only
/// means the cue is not heard.
///
/// # Example
///
/// ```
/// use audio_cues::{CueConfig, SilentSink};
/// use exercise_session::{ManualClock, SessionEngine};
/// use exercise_types::{SessionConfig, SessionState};
/// use sensor_types::{MotionReading, OrientationReading, Vector3Reading};
///
/// let mut engine = SessionEngine::new(
///     SessionConfig::default(),
///     CueConfig::default(),
///     Box::new(SilentSink),
///     Box::new(ManualClock::new()),
/// )
/// .unwrap();
///
/// let shake = MotionReading::with_gravity(Vector3Reading::new(0.0, 20.0, 0.0));
/// let snapshot = engine.on_tick(&OrientationReading::default(), &shake);
/// assert_eq!(snapshot.state, SessionState::Playing);
/// ```
pub struct SessionEngine {
    machine: SessionMachine,
    cues: CueDispatcher,
    clock: Box<dyn Clock>,
    latch: SensorLatch,
    observer: Box<dyn SessionObserver>,
}

impl SessionEngine {
    /// Builds an engine.
    ///
    /// # Errors
    ///
    /// Returns an error if either config fails validation. Nothing is
    /// checked again after construction.
    pub fn new(
        config: SessionConfig,
        cue_config: CueConfig,
        sink: Box<dyn AudioSink>,
        clock: Box<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;
        let cues = CueDispatcher::new(sink, cue_config)?;
        info!(
            targets = config.path.len(),
            repetitions = config.target_repetitions,
            reach_threshold = config.reach_threshold,
            "session engine ready"
        );

        Ok(Self {
            machine: SessionMachine::new(config),
            cues,
            clock,
            latch: SensorLatch::new(),
            observer: Box::new(NoopObserver),
        })
    }

    /// Replaces the observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replaces the observer in place.
    pub fn set_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observer = observer;
    }

    /// Snapshot as of the latest tick.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.machine.snapshot()
    }

    /// The exercise path, for rendering target markers.
    #[must_use]
    pub const fn path(&self) -> &ExercisePath {
        self.machine.path()
    }

    /// Latest sensor readings received through `ingest_*`.
    #[must_use]
    pub const fn sensors(&self) -> &SensorLatch {
        &self.latch
    }

    /// Cue notes scheduled but not yet played.
    #[must_use]
    pub fn pending_cues(&self) -> usize {
        self.cues.pending()
    }

    /// Stores an orientation event. Missing fields read as zero.
    pub fn ingest_orientation(&mut self, raw: &RawOrientation) {
        self.latch.update_orientation(self.clock.now(), raw);
    }

    /// Stores a motion event. Missing fields read as zero.
    pub fn ingest_motion(&mut self, raw: &RawMotion) {
        self.latch.update_motion(self.clock.now(), raw);
    }

    /// Runs one tick on the latest ingested readings.
    pub fn tick(&mut self) -> SessionSnapshot {
        let orientation = self.latch.orientation();
        let motion = self.latch.motion();
        self.on_tick(&orientation, &motion)
    }

    /// Runs one tick on the given readings and returns the resulting
    /// snapshot.
    pub fn on_tick(
        &mut self,
        orientation: &OrientationReading,
        motion: &MotionReading,
    ) -> SessionSnapshot {
        let now = self.clock.now();
        let outcome = self.machine.step(now, orientation, motion);
        self.dispatch(&outcome);
        self.cues.pump(now);
        self.machine.snapshot()
    }

    /// Discards the current session and waits for a new start gesture.
    ///
    /// Callable from any state. Cue notes already scheduled from the
    /// previous session still play. If the device is still shaking when this
    /// is called, the new session starts only after a tick whose
    /// acceleration drops to the shake threshold or below, followed by a
    /// fresh shake.
    pub fn start_session(&mut self) {
        self.machine.reset();
        info!("session reset, waiting for start gesture");
    }

    /// Plays cue notes that have come due without running a tick.
    ///
    /// Hosts that tick irregularly can call this from a timer so chimes
    /// keep their spacing. Returns the number of notes consumed.
    pub fn pump_audio(&mut self) -> usize {
        self.cues.pump(self.clock.now())
    }

    fn dispatch(&mut self, outcome: &TickOutcome) {
        let now = self.clock.now();

        if let Some(proximity) = outcome.proximity {
            self.cues.proximity_tone(proximity);
        }

        for event in &outcome.events {
            match *event {
                SessionEvent::Started => self.cues.cue(Cue::Start, now),
                SessionEvent::TargetReached { .. } => {
                    self.observer.on_score_change(self.machine.snapshot().score);
                }
                SessionEvent::RepetitionCompleted { repetitions } => {
                    self.cues.cue(Cue::Success, now);
                    self.observer.on_repetition_complete(repetitions);
                }
                SessionEvent::Completed { final_score } => {
                    self.cues.cue(Cue::Completion, now);
                    self.observer.on_session_complete(final_score);
                }
            }
        }

        if !outcome.events.is_empty() {
            debug!(events = outcome.events.len(), "tick dispatched");
        }
    }
}

impl std::fmt::Debug for SessionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEngine")
            .field("machine", &self.machine)
            .field("cues", &self.cues)
            .field("latch", &self.latch)
            .finish_non_exhaustive()
    }
}
