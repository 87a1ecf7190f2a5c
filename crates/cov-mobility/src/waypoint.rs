//! Random waypoint: pick a target, travel to it in equal steps, pause.

use cov_core::{Point, SimRng};

use crate::{MobilityParams, Phase};

/// Per-agent random-waypoint state.
///
/// A trip is planned once: the per-step displacement is
/// `(target - start) / steps` with `steps = floor(distance / speed)`.  After
/// the final step the agent sits exactly on the target and waits
/// `wait_time` steps before the next trip starts.  With `wait_time == 0` the
/// next trip is planned *and* its first step taken on the step right after
/// arrival.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RandomWaypoint {
    target:     Point,
    delta:      Point,
    steps_left: u64,
    wait_left:  u32,
}

impl RandomWaypoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.steps_left > 0 { Phase::Traveling } else { Phase::Waiting }
    }

    /// Steps remaining in the current trip (0 when not travelling).
    pub fn steps_left(&self) -> u64 {
        self.steps_left
    }

    /// Pause steps remaining before the next trip is planned.
    pub fn wait_left(&self) -> u32 {
        self.wait_left
    }

    /// Destination of the current (or last) trip.
    pub fn target(&self) -> Point {
        self.target
    }

    pub fn step(&mut self, position: &mut Point, params: &MobilityParams, rng: &mut SimRng) {
        if self.steps_left > 0 {
            self.advance(position);
            return;
        }
        if self.wait_left > 0 {
            self.wait_left -= 1;
            return;
        }
        self.begin_trip(position, params, rng);
    }

    /// Draw order: target x, target y, speed.
    fn begin_trip(&mut self, position: &mut Point, params: &MobilityParams, rng: &mut SimRng) {
        let target = Point::new(
            rng.uniform_closed(0.0, params.area.width as f64),
            rng.uniform_closed(0.0, params.area.height as f64),
        );
        let speed = rng.uniform_closed(params.min_speed, params.max_speed);
        self.wait_left = params.wait_time;

        let distance = position.distance(target);
        let steps = if speed > 0.0 { (distance / speed).floor() } else { 0.0 };
        // Zero steps (target on top of us, or closer than one step): no-op.
        if !steps.is_finite() || steps < 1.0 {
            return;
        }

        self.target = target;
        self.delta = Point::new((target.x - position.x) / steps, (target.y - position.y) / steps);
        self.steps_left = steps as u64;
        self.advance(position);
    }

    fn advance(&mut self, position: &mut Point) {
        self.steps_left -= 1;
        if self.steps_left == 0 {
            *position = self.target;
        } else {
            position.x += self.delta.x;
            position.y += self.delta.y;
        }
    }
}
