//! The `MobilityModel` tagged variant and its shared parameters.

use cov_core::{Area, Point, ScenarioConfig, SimRng};

use crate::{Enterprise, ModelKind, RandomDirection, RandomWaypoint};

/// Scenario-wide movement parameters, borrowed read-only by every model on
/// every step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MobilityParams {
    pub area:      Area,
    pub min_speed: f64,
    pub max_speed: f64,
    pub wait_time: u32,
}

impl MobilityParams {
    pub fn from_config(config: &ScenarioConfig) -> Self {
        Self {
            area:      config.area,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            wait_time: config.wait_time,
        }
    }
}

/// One agent's movement rule together with its private motion state.
///
/// Construct with [`MobilityModel::new`]; each agent gets its own instance.
#[derive(Clone, Debug)]
pub enum MobilityModel {
    RandomWaypoint(RandomWaypoint),
    RandomDirection(RandomDirection),
    Enterprise(Enterprise),
}

impl MobilityModel {
    /// Build a fresh model of `kind`.
    ///
    /// RandomDirection draws its initial heading then speed from `rng` here;
    /// the other models draw lazily on their first step.
    pub fn new(kind: ModelKind, params: &MobilityParams, rng: &mut SimRng) -> Self {
        match kind {
            ModelKind::RandomWaypoint  => MobilityModel::RandomWaypoint(RandomWaypoint::new()),
            ModelKind::RandomDirection => {
                MobilityModel::RandomDirection(RandomDirection::new(params, rng))
            }
            ModelKind::Enterprise      => MobilityModel::Enterprise(Enterprise::new()),
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            MobilityModel::RandomWaypoint(_)  => ModelKind::RandomWaypoint,
            MobilityModel::RandomDirection(_) => ModelKind::RandomDirection,
            MobilityModel::Enterprise(_)      => ModelKind::Enterprise,
        }
    }

    /// Advance `position` by one time step.
    #[inline]
    pub fn step(&mut self, position: &mut Point, params: &MobilityParams, rng: &mut SimRng) {
        match self {
            MobilityModel::RandomWaypoint(m)  => m.step(position, params, rng),
            MobilityModel::RandomDirection(m) => m.step(position, params, rng),
            MobilityModel::Enterprise(m)      => m.step(position, params, rng),
        }
    }
}
