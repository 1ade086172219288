//! A scripted head that shakes the device, then turns toward each target.

use exercise_types::TargetPosition;
use sensor_types::{MotionReading, OrientationReading, Vector3Reading};

/// Standard gravity, the accelerometer reading of a device at rest.
const GRAVITY: f64 = 9.81;

/// Accelerometer magnitude of the scripted start shake.
const SHAKE: f64 = 22.0;

/// Orientation that faces `target` head-on.
pub fn aim(target: TargetPosition) -> OrientationReading {
    let Some(dir) = target.direction() else {
        return OrientationReading::default();
    };
    OrientationReading::new(
        (-dir.x).atan2(-dir.z).to_degrees(),
        dir.y.clamp(-1.0, 1.0).asin().to_degrees(),
        0.0,
    )
}

/// Signed shortest turn from `from` to `to`, in degrees.
fn angular_delta(from: f64, to: f64) -> f64 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

fn approach(from: f64, to: f64, max_step: f64) -> f64 {
    let delta = angular_delta(from, to);
    from + delta.clamp(-max_step, max_step)
}

/// Produces one pair of sensor readings per frame.
///
/// The head idles for `idle_frames`, shakes once, then turns toward
/// whatever target it is given at `turn_rate` degrees per frame.
#[derive(Debug, Clone)]
pub struct ScriptedHead {
    orientation: OrientationReading,
    idle_frames: u32,
    turn_rate: f64,
    frame: u32,
}

impl ScriptedHead {
    pub fn new(idle_frames: u32, turn_rate: f64) -> Self {
        Self {
            orientation: OrientationReading::default(),
            idle_frames,
            turn_rate,
            frame: 0,
        }
    }

    /// Readings for the next frame while the head tracks `target`.
    pub fn next_frame(&mut self, target: TargetPosition) -> (OrientationReading, MotionReading) {
        let frame = self.frame;
        self.frame = self.frame.saturating_add(1);

        let magnitude = if frame == self.idle_frames {
            SHAKE
        } else {
            GRAVITY
        };
        let motion = MotionReading::with_gravity(Vector3Reading::new(0.0, magnitude, 0.0));

        if frame > self.idle_frames {
            let goal = aim(target);
            self.orientation = OrientationReading::new(
                approach(self.orientation.alpha, goal.alpha, self.turn_rate).rem_euclid(360.0),
                approach(self.orientation.beta, goal.beta, self.turn_rate),
                0.0,
            );
        }

        (self.orientation, motion)
    }
}
