//! Time sources for the engine.
//!
//! The engine never reads wall-clock time directly. It asks a [`Clock`],
//! so hosts can drive it from a real monotonic clock and tests can step
//! time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use sensor_types::{Duration, Timestamp};

/// A monotonic time source.
pub trait Clock {
    /// Current time. Must never go backwards.
    fn now(&self) -> Timestamp;
}

/// Real time, measured from when the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Starts a clock at [`Timestamp::zero`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        Timestamp::zero().saturating_add(Duration::from(self.origin.elapsed()))
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to the engine.
///
/// # Example
///
/// ```
/// use exercise_session::{Clock, ManualClock};
/// use sensor_types::Duration;
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(150));
/// assert_eq!(clock.now().as_millis(), 150);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Timestamp>>,
}

impl ManualClock {
    /// Creates a clock at [`Timestamp::zero`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Jumps to `at`. Ignored if `at` is earlier than the current time.
    pub fn set(&self, at: Timestamp) {
        if at > self.now.get() {
            self.now.set(at);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
