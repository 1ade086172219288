//! Property-based tests for session invariants.
//!
//! Run with: cargo test -p exercise-session -- proptest

#![allow(clippy::unwrap_used)]

use audio_cues::{CueConfig, SilentSink};
use exercise_session::{ManualClock, ProximityScorer, SessionEngine};
use exercise_types::{ExercisePath, SessionConfig, SessionState, TargetPosition};
use proptest::prelude::*;
use sensor_types::{Duration, MotionReading, OrientationReading, Vector3Reading};

// =============================================================================
// Strategies
// =============================================================================

fn arb_orientation() -> impl Strategy<Value = OrientationReading> {
    (0.0..360.0f64, -180.0..180.0f64, -90.0..90.0f64)
        .prop_map(|(alpha, beta, gamma)| OrientationReading::new(alpha, beta, gamma))
}

/// Targets at least a little way from the origin.
fn arb_target() -> impl Strategy<Value = TargetPosition> {
    prop::array::uniform3(-10.0..10.0f64)
        .prop_filter("non-zero target", |[x, y, z]| x * x + y * y + z * z > 1e-6)
        .prop_map(|[x, y, z]| TargetPosition::new(x, y, z))
}

/// One tick of input: orientation plus accelerometer magnitude.
fn arb_tick() -> impl Strategy<Value = (OrientationReading, f64)> {
    (arb_orientation(), 0.0..30.0f64)
}

fn engine(path: ExercisePath, repetitions: u32) -> (SessionEngine, ManualClock) {
    let clock = ManualClock::new();
    let engine = SessionEngine::new(
        SessionConfig::with_path(path).with_target_repetitions(repetitions),
        CueConfig::default(),
        Box::new(SilentSink),
        Box::new(clock.clone()),
    )
    .unwrap();
    (engine, clock)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_proximity_in_unit_range(orientation in arb_orientation(), target in arb_target()) {
        let p = ProximityScorer.proximity(&orientation, target);
        prop_assert!((0.0..=1.0).contains(&p), "proximity {} out of range", p);
    }

    #[test]
    fn proptest_points_bounded(p in 0.0..=1.0f64) {
        prop_assert!(ProximityScorer::points(p) <= 100);
    }

    #[test]
    fn proptest_session_invariants(
        targets in prop::collection::vec(arb_target(), 1..6),
        repetitions in 1u32..4,
        ticks in prop::collection::vec(arb_tick(), 1..200),
    ) {
        let path = ExercisePath::new(targets).unwrap();
        let len = path.len();
        let (mut engine, clock) = engine(path, repetitions);
        let mut last = engine.snapshot();

        for (orientation, magnitude) in ticks {
            clock.advance(Duration::from_millis(16));
            let motion = MotionReading::with_gravity(Vector3Reading::new(0.0, magnitude, 0.0));
            let snapshot = engine.on_tick(&orientation, &motion);

            prop_assert!(snapshot.score >= last.score);
            prop_assert!(snapshot.repetitions >= last.repetitions);
            prop_assert!(snapshot.repetitions <= repetitions);
            prop_assert!(snapshot.current_target_index < len);
            prop_assert_eq!(
                snapshot.state == SessionState::Completed,
                snapshot.repetitions == repetitions
            );
            if snapshot.state != SessionState::Playing {
                prop_assert!(snapshot.accuracy.abs() < f64::EPSILON);
            } else {
                prop_assert!((0.0..=1.0).contains(&snapshot.accuracy));
            }
            if last.state == SessionState::Completed {
                prop_assert_eq!(snapshot, last);
            }
            last = snapshot;
        }
    }
}
