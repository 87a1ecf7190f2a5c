//! The `Simulator` struct and its step loop.

use cov_core::{AgentId, Point, ScenarioConfig, SimRng};
use cov_grid::CoverageGrid;
use cov_mobility::{MobilityModel, MobilityParams, ModelKind};

use crate::{Agent, PositionRow, SimObserver, SimResult};

/// One trial: a fresh agent population and coverage grid driven for
/// `duration` steps.
///
/// A `Simulator` is built per repetition and discarded after [`run`]
/// returns; nothing carries over between trials except what the caller
/// does with the seed.
///
/// [`run`]: Simulator::run
pub struct Simulator {
    params:   MobilityParams,
    duration: u32,
    history:  bool,
    window:   usize,
    rng:      SimRng,
    agents:   Vec<Agent>,
    grid:     CoverageGrid,
    /// Next step to execute.
    now:      u32,
    sample_sum:   f64,
    sample_count: u64,
}

impl Simulator {
    /// Validate `config`, resolve its model kind, and create the agents.
    ///
    /// The trial's RNG is seeded from `config.seed`.  Agents are created in
    /// id order; each draws its start x, then start y, then whatever its
    /// model draws at construction.
    pub fn new(config: &ScenarioConfig) -> SimResult<Self> {
        config.validate()?;
        let kind: ModelKind = config.model_kind.parse()?;
        let grid = CoverageGrid::new(config.area, config.comm_radius, config.effective_window())?;

        let params = MobilityParams::from_config(config);
        let mut rng = SimRng::from_scenario_seed(config.seed);
        let width = config.area.width as f64;
        let height = config.area.height as f64;

        let agents = (0..config.agent_count)
            .map(|i| {
                let start = Point::new(
                    rng.uniform_closed(0.0, width),
                    rng.uniform_closed(0.0, height),
                );
                let model = MobilityModel::new(kind, &params, &mut rng);
                Agent::new(AgentId(i), start, model)
            })
            .collect();

        Ok(Self {
            params,
            duration: config.duration,
            history: config.history_enabled(),
            window: config.effective_window(),
            rng,
            agents,
            grid,
            now: 0,
            sample_sum: 0.0,
            sample_count: 0,
        })
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn grid(&self) -> &CoverageGrid {
        &self.grid
    }

    /// Index of the next step to execute.
    pub fn current_step(&self) -> u32 {
        self.now
    }

    pub fn is_finished(&self) -> bool {
        self.now >= self.duration
    }

    /// Execute one step.  Returns `false` without doing anything once
    /// `duration` steps have run.
    pub fn step<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> bool {
        if self.is_finished() {
            return false;
        }
        let t = self.now;
        let key = if self.history { t as i64 } else { 0 };

        for agent in &mut self.agents {
            agent.step(&self.params, &mut self.rng);
            let (cx, cy) = agent.position.cell();
            self.grid.stamp(cx, cy, key);
            observer.on_position(&PositionRow {
                agent_id: agent.id,
                tick:     t,
                x:        agent.position.x,
                y:        agent.position.y,
            });
        }

        // Steps before the window has filled contribute no sample.
        let sample = if self.history && t as usize + 1 >= self.window {
            let coverage = self.grid.coverage_across_history();
            self.sample_sum += coverage;
            self.sample_count += 1;
            Some(coverage)
        } else {
            None
        };
        observer.on_step_end(t, sample);

        self.now += 1;
        true
    }

    /// Run the remaining steps and return the trial's coverage percentage.
    pub fn run<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> f64 {
        while self.step(observer) {}
        let coverage = self.coverage();
        observer.on_sim_end(coverage);
        coverage
    }

    /// Coverage metric for the steps executed so far.
    ///
    /// With history enabled: the mean of the windowed samples (0 if none
    /// were taken).  Without history: the single slot every stamp has gone
    /// into, i.e. the union of everything reached since the trial began.
    /// This is not the final step's instantaneous coverage: the constant
    /// stamp key never triggers the slot clear.
    pub fn coverage(&self) -> f64 {
        if self.history {
            if self.sample_count == 0 {
                0.0
            } else {
                self.sample_sum / self.sample_count as f64
            }
        } else {
            self.grid.coverage_across_history()
        }
    }

    /// Number of windowed samples taken so far.
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }
}
