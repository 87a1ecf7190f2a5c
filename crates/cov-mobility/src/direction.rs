//! Random direction: move in a straight line until the next step would leave
//! the area, then stop at the wall, pause, and pick a new heading and speed.

use cov_core::{Point, SimRng};

use crate::{MobilityParams, Phase};

/// Per-agent random-direction state.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDirection {
    /// Degrees in `[0, 360)`.
    heading:   f64,
    speed:     f64,
    wait_left: u32,
}

impl RandomDirection {
    /// Draw order: heading, speed.
    pub fn new(params: &MobilityParams, rng: &mut SimRng) -> Self {
        let heading = rng.gen_range(0.0..360.0);
        let speed = rng.uniform_closed(params.min_speed, params.max_speed);
        Self { heading, speed, wait_left: 0 }
    }

    /// Start travelling along a fixed heading / speed with no pending wait.
    pub fn with_motion(heading_deg: f64, speed: f64) -> Self {
        Self { heading: heading_deg, speed, wait_left: 0 }
    }

    pub fn phase(&self) -> Phase {
        if self.wait_left > 0 { Phase::Waiting } else { Phase::Traveling }
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn wait_left(&self) -> u32 {
        self.wait_left
    }

    pub fn step(&mut self, position: &mut Point, params: &MobilityParams, rng: &mut SimRng) {
        if self.wait_left > 0 {
            self.wait_left -= 1;
            return;
        }

        let (sin, cos) = self.heading.to_radians().sin_cos();
        let candidate = Point::new(position.x + self.speed * cos, position.y + self.speed * sin);

        if params.area.contains(candidate) {
            *position = candidate;
            return;
        }

        // Hit a wall: stay put (snapped onto the boundary), then re-draw in
        // the order wait, heading, speed.
        *position = params.area.clamp(*position);
        self.wait_left = rng.gen_range(0..=params.wait_time);
        self.heading = rng.gen_range(0.0..360.0);
        self.speed = rng.uniform_closed(params.min_speed, params.max_speed);
    }
}
