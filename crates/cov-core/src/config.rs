//! Per-scenario parameter record.
//!
//! `ScenarioConfig` is produced by an external loader (one record per
//! scenario) and handed to the simulator once per repetition.  Everything
//! except `seed` is fixed for the life of the scenario; the batch layer
//! advances the seed between repetitions.

use crate::{Area, CovError, CovResult};

/// One scenario's parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Number of mobile sinks.
    pub agent_count: u32,

    /// Bounded rectangle the agents roam in; also the coverage grid size.
    pub area: Area,

    /// Number of discrete time steps per trial.
    pub duration: u32,

    /// Communication radius in cells.
    pub comm_radius: f64,

    /// Mobility model name as received from the loader
    /// (`RandomWaypoint`, `RandomDirection`, `Enterprise`).  Parsed when the
    /// trial is constructed so an unknown name fails only its own scenario.
    pub model_kind: String,

    /// Lower bound of trip / travel speed (cells per step).
    pub min_speed: f64,

    /// Upper bound of trip / travel speed (cells per step).
    pub max_speed: f64,

    /// Pause length in steps.  RandomWaypoint waits exactly this long after
    /// each trip; RandomDirection draws a wait uniformly in `[0, wait_time]`.
    pub wait_time: u32,

    /// Seed of the current repetition.
    pub seed: i64,

    /// Number of time slots kept for cumulative coverage.  Values `<= 1`
    /// disable history tracking (effective window of one slot).
    pub history_window: i32,

    /// Where the external sink should write per-step positions, if anywhere.
    pub log_path: Option<String>,
}

impl ScenarioConfig {
    /// `true` when coverage is sampled over a sliding window of more than one
    /// slot.
    #[inline]
    pub fn history_enabled(&self) -> bool {
        self.history_window > 1
    }

    /// Number of ring-buffer slots the coverage grid must hold (at least 1).
    #[inline]
    pub fn effective_window(&self) -> usize {
        self.history_window.max(1) as usize
    }

    /// Copy of `self` with a different seed.
    pub fn with_seed(&self, seed: i64) -> Self {
        Self { seed, ..self.clone() }
    }

    /// Check the numeric fields a trial relies on.
    ///
    /// Called at simulator construction so a malformed record fails only the
    /// scenario it belongs to.
    pub fn validate(&self) -> CovResult<()> {
        if self.area.width == 0 || self.area.height == 0 {
            return Err(CovError::EmptyArea {
                width:  self.area.width,
                height: self.area.height,
            });
        }
        if !self.min_speed.is_finite()
            || !self.max_speed.is_finite()
            || self.min_speed < 0.0
            || self.min_speed > self.max_speed
        {
            return Err(CovError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !self.comm_radius.is_finite() || self.comm_radius < 0.0 {
            return Err(CovError::Config(format!(
                "communication radius must be a finite non-negative number, got {}",
                self.comm_radius
            )));
        }
        Ok(())
    }
}
