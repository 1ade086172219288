//! Time types for sensor data and cue scheduling.
//!
//! Timestamps are logical: they count nanoseconds from an arbitrary origin
//! (engine start, simulation start) and only ever need to be compared with
//! each other.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nanosecond-precision timestamp.
///
/// # Example
///
/// ```
/// use sensor_types::{Duration, Timestamp};
///
/// let start = Timestamp::from_millis(1_000);
/// let later = start.saturating_add(Duration::from_millis(150));
/// assert_eq!(later.duration_since(start), Duration::from_millis(150));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    nanos: u64,
}

impl Timestamp {
    /// Creates a timestamp from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Creates a timestamp from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            nanos: millis.saturating_mul(1_000_000),
        }
    }

    /// Creates a timestamp from seconds (floating point).
    ///
    /// Negative and `NaN` inputs clamp to zero.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub fn from_secs_f64(secs: f64) -> Self {
        let nanos = (secs * 1e9).max(0.0) as u64;
        Self { nanos }
    }

    /// Returns the timestamp as nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.nanos
    }

    /// Returns the timestamp as whole milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Returns the timestamp as seconds (floating point).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Returns the zero timestamp.
    #[must_use]
    pub const fn zero() -> Self {
        Self { nanos: 0 }
    }

    /// Adds a duration, saturating at the maximum representable time.
    #[must_use]
    pub const fn saturating_add(self, duration: Duration) -> Self {
        Self {
            nanos: self.nanos.saturating_add(duration.as_nanos()),
        }
    }

    /// Returns the time elapsed since `earlier`, or zero if `earlier` is later.
    #[must_use]
    pub const fn duration_since(self, earlier: Self) -> Duration {
        Duration::from_nanos(self.nanos.saturating_sub(earlier.nanos))
    }
}

/// A duration of time with nanosecond precision.
///
/// # Example
///
/// ```
/// use sensor_types::Duration;
///
/// let d = Duration::from_millis(100);
/// assert_eq!(d.as_nanos(), 100_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Duration {
    nanos: u64,
}

impl Duration {
    /// Creates a duration from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Creates a duration from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            nanos: millis.saturating_mul(1_000_000),
        }
    }

    /// Returns the duration in nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.nanos
    }

    /// Returns the duration in whole milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Returns the zero duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self { nanos: 0 }
    }

    /// Checks if this is the zero duration.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// Multiplies the duration by an integer factor, saturating on overflow.
    #[must_use]
    pub const fn saturating_mul(self, factor: u64) -> Self {
        Self {
            nanos: self.nanos.saturating_mul(factor),
        }
    }
}

impl From<std::time::Duration> for Duration {
    #[allow(clippy::cast_possible_truncation)]
    fn from(d: std::time::Duration) -> Self {
        Self::from_nanos(d.as_nanos().min(u128::from(u64::MAX)) as u64)
    }
}
