//! Enterprise model: constant-velocity motion inside the area, reflected off
//! the walls, with speed and heading perturbed every few steps by draws from
//! the empirical tables in [`crate::empirical`].

use cov_core::{Point, SimRng};

use crate::{MobilityParams, SpeedClass};

/// Steps between two speed/heading re-draws.
pub const REDRAW_INTERVAL: u32 = 5;

/// Per-agent Enterprise state.  Motion is initialised lazily on the first
/// step so that agent creation consumes no draws for this model.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Enterprise {
    motion: Option<Motion>,
}

#[derive(Clone, Debug, PartialEq)]
struct Motion {
    /// Integer degrees.  Only wrapped by reflections, so it can drift
    /// outside `[0, 360)` after heading changes; velocity uses it mod 360.
    heading:   i32,
    /// Speed in whole units wherever the configured range allows it.
    speed:     f64,
    countdown: u32,
    vx:        f64,
    vy:        f64,
    /// Committed direction of speed changes: 0 undetermined, ±1 committed.
    speed_sign:   i32,
    /// Committed direction of heading changes: 0 undetermined, ±1 committed.
    heading_sign: i32,
}

impl Motion {
    fn new(heading: i32, speed: f64) -> Self {
        let mut motion = Motion {
            heading,
            speed,
            countdown: REDRAW_INTERVAL,
            vx: 0.0,
            vy: 0.0,
            speed_sign: 0,
            heading_sign: 0,
        };
        motion.recompute_velocity();
        motion
    }

    fn recompute_velocity(&mut self) {
        let (sin, cos) = (self.heading.rem_euclid(360) as f64).to_radians().sin_cos();
        self.vx = self.speed * cos;
        self.vy = self.speed * sin;
    }

    fn reverse(&mut self) {
        self.heading = (self.heading.rem_euclid(360) + 180) % 360;
        self.recompute_velocity();
    }
}

impl Enterprise {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already moving at `heading` degrees and `speed`, with a full
    /// countdown and no committed signs.
    pub fn with_motion(heading: i32, speed: f64) -> Self {
        Self { motion: Some(Motion::new(heading, speed)) }
    }

    pub fn heading(&self) -> Option<i32> {
        self.motion.as_ref().map(|m| m.heading)
    }

    pub fn speed(&self) -> Option<f64> {
        self.motion.as_ref().map(|m| m.speed)
    }

    pub fn countdown(&self) -> Option<u32> {
        self.motion.as_ref().map(|m| m.countdown)
    }

    /// `(vx, vy)` per step.
    pub fn velocity(&self) -> Option<(f64, f64)> {
        self.motion.as_ref().map(|m| (m.vx, m.vy))
    }

    /// `(speed_sign, heading_sign)` memory flags.
    pub fn signs(&self) -> Option<(i32, i32)> {
        self.motion.as_ref().map(|m| (m.speed_sign, m.heading_sign))
    }

    pub fn step(&mut self, position: &mut Point, params: &MobilityParams, rng: &mut SimRng) {
        let motion = self.motion.get_or_insert_with(|| init_motion(params, rng));

        position.x += motion.vx;
        position.y += motion.vy;

        // Axes are checked independently: a corner hit reverses twice.
        let width = params.area.width as f64;
        let height = params.area.height as f64;
        if let Some(x) = reflect(position.x, width) {
            position.x = x;
            motion.reverse();
        }
        if let Some(y) = reflect(position.y, height) {
            position.y = y;
            motion.reverse();
        }
        // A step longer than the area can still overshoot after reflecting.
        *position = params.area.clamp(*position);

        motion.countdown -= 1;
        if motion.countdown == 0 {
            redraw(motion, params, rng);
        }
    }
}

/// Draw order: speed, heading.
fn init_motion(params: &MobilityParams, rng: &mut SimRng) -> Motion {
    let speed = rng
        .uniform_closed(params.min_speed, params.max_speed)
        .round()
        .clamp(params.min_speed, params.max_speed);
    let heading = rng.gen_range(0..360);
    Motion::new(heading, speed)
}

/// Mirror `v` back into `[0, bound]` across the wall it crossed: `2·0 − v`
/// below, `2·bound − v` above.  `None` if it is already inside.
pub(crate) fn reflect(v: f64, bound: f64) -> Option<f64> {
    if v < 0.0 {
        Some(-v)
    } else if v > bound {
        Some(2.0 * bound - v)
    } else {
        None
    }
}

/// Draw order: speed-change magnitude, heading-change magnitude, then the
/// speed sign coin flip and heading sign coin flip (each only if needed).
fn redraw(motion: &mut Motion, params: &MobilityParams, rng: &mut SimRng) {
    let tables = SpeedClass::of(motion.speed).tables();
    let speed_change = tables.speed_change.sample(rng);
    let heading_change = tables.direction_change.sample(rng);

    let speed_delta = signed(speed_change, &mut motion.speed_sign, rng);
    let heading_delta = signed(heading_change, &mut motion.heading_sign, rng);

    motion.speed = (motion.speed + speed_delta as f64).clamp(params.min_speed, params.max_speed);
    motion.heading = motion.heading.wrapping_add(heading_delta);
    motion.recompute_velocity();
    motion.countdown = REDRAW_INTERVAL;
}

/// Apply the persistent sign to `magnitude`.  A zero draw forgets the sign;
/// the first non-zero draw after that commits a fresh coin flip.
pub(crate) fn signed(magnitude: u32, sign: &mut i32, rng: &mut SimRng) -> i32 {
    if magnitude == 0 {
        *sign = 0;
        return 0;
    }
    if *sign == 0 {
        *sign = rng.sign();
    }
    *sign * magnitude as i32
}
