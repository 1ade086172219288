//! Logical timer queue for delayed notes.

use std::collections::VecDeque;

use sensor_types::Timestamp;

use crate::note::{Note, NoteValue};

/// A note waiting for its due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingNote {
    /// When the note should sound.
    pub due: Timestamp,
    /// Pitch.
    pub note: Note,
    /// Length.
    pub value: NoteValue,
}

/// A time-ordered queue of pending notes.
///
/// Nothing here blocks or sleeps: the owner calls [`pop_due`](Self::pop_due)
/// with the current logical time (typically once per frame) and plays what
/// comes out. Notes with equal due times come out in insertion order. There
/// is no cancellation; once scheduled, a note stays queued until due.
///
/// The queue is bounded. When full, the oldest pending note is discarded to
/// make room.
///
/// # Example
///
/// ```
/// use audio_cues::{CueScheduler, Note, NoteValue};
/// use sensor_types::Timestamp;
///
/// let mut queue = CueScheduler::new(16);
/// queue.schedule(Timestamp::from_millis(150), Note::E5, NoteValue::Quarter);
/// queue.schedule(Timestamp::from_millis(0), Note::C5, NoteValue::Quarter);
///
/// assert_eq!(queue.pop_due(Timestamp::from_millis(10)).map(|p| p.note), Some(Note::C5));
/// assert!(queue.pop_due(Timestamp::from_millis(10)).is_none());
/// assert_eq!(queue.pop_due(Timestamp::from_millis(150)).map(|p| p.note), Some(Note::E5));
/// ```
#[derive(Debug, Clone)]
pub struct CueScheduler {
    capacity: usize,
    pending: VecDeque<PendingNote>,
}

impl Default for CueScheduler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl CueScheduler {
    /// Default queue bound.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Creates an empty queue holding at most `capacity` notes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            pending: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// Maximum number of pending notes.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of pending notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending note.
    #[must_use]
    pub fn next_due(&self) -> Option<Timestamp> {
        self.pending.front().map(|p| p.due)
    }

    /// Queues a note. Returns the note evicted to make room, if any.
    pub fn schedule(&mut self, due: Timestamp, note: Note, value: NoteValue) -> Option<PendingNote> {
        let evicted = if self.pending.len() >= self.capacity {
            self.pending.pop_front()
        } else {
            None
        };

        // First index whose due time is strictly later keeps ties FIFO.
        let index = self.pending.partition_point(|p| p.due <= due);
        self.pending.insert(index, PendingNote { due, note, value });
        evicted
    }

    /// Removes and returns the earliest note due at or before `now`.
    pub fn pop_due(&mut self, now: Timestamp) -> Option<PendingNote> {
        if self.pending.front()?.due <= now {
            self.pending.pop_front()
        } else {
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Timestamp {
        Timestamp::from_millis(millis)
    }

    #[test]
    fn empty_queue() {
        let mut queue = CueScheduler::default();
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), CueScheduler::DEFAULT_CAPACITY);
        assert!(queue.next_due().is_none());
        assert!(queue.pop_due(ms(1_000)).is_none());
    }

    #[test]
    fn pops_in_due_order() {
        let mut queue = CueScheduler::new(8);
        queue.schedule(ms(300), Note::G5, NoteValue::Quarter);
        queue.schedule(ms(0), Note::C5, NoteValue::Quarter);
        queue.schedule(ms(150), Note::E5, NoteValue::Quarter);
        assert_eq!(queue.next_due(), Some(ms(0)));

        let order: Vec<Note> = std::iter::from_fn(|| queue.pop_due(ms(300)))
            .map(|p| p.note)
            .collect();
        assert_eq!(order, vec![Note::C5, Note::E5, Note::G5]);
    }

    #[test]
    fn ties_are_fifo() {
        let mut queue = CueScheduler::new(8);
        queue.schedule(ms(100), Note::C5, NoteValue::Eighth);
        queue.schedule(ms(100), Note::D5, NoteValue::Eighth);
        queue.schedule(ms(100), Note::E5, NoteValue::Eighth);
        assert_eq!(queue.pop_due(ms(100)).unwrap().note, Note::C5);
        assert_eq!(queue.pop_due(ms(100)).unwrap().note, Note::D5);
        assert_eq!(queue.pop_due(ms(100)).unwrap().note, Note::E5);
    }

    #[test]
    fn not_due_stays_queued() {
        let mut queue = CueScheduler::new(8);
        queue.schedule(ms(500), Note::C5, NoteValue::Eighth);
        assert!(queue.pop_due(ms(499)).is_none());
        assert_eq!(queue.len(), 1);
        assert!(queue.pop_due(ms(500)).is_some());
    }

    #[test]
    fn full_queue_evicts_oldest() {
        let mut queue = CueScheduler::new(2);
        assert!(queue.schedule(ms(10), Note::C5, NoteValue::Eighth).is_none());
        assert!(queue.schedule(ms(20), Note::D5, NoteValue::Eighth).is_none());
        let evicted = queue.schedule(ms(30), Note::E5, NoteValue::Eighth);
        assert_eq!(evicted.map(|p| p.note), Some(Note::C5));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.next_due(), Some(ms(20)));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        assert_eq!(CueScheduler::new(0).capacity(), 1);
    }
}
