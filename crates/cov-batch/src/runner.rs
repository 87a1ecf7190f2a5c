//! The `BatchRunner`.

use cov_core::ScenarioConfig;
use cov_sim::{NoopObserver, Simulator};
use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::row::round2;
use crate::{BatchConfig, BatchResult, NoTraces, ResultRow, ResultSink, TraceSinks};

/// Runs every scenario `repetitions` times and averages the coverage.
///
/// Scenarios run concurrently on a dedicated Rayon pool of
/// `config.workers` threads; a scenario's repetitions run one after another
/// on the thread that picked it up.
pub struct BatchRunner<T: TraceSinks = NoTraces> {
    config: BatchConfig,
    traces: T,
}

impl BatchRunner<NoTraces> {
    /// A runner that ignores `log_path`.
    pub fn new(config: BatchConfig) -> Self {
        Self { config, traces: NoTraces }
    }
}

impl<T: TraceSinks> BatchRunner<T> {
    /// A runner that opens a trace through `traces` for every repetition of
    /// a scenario that has a `log_path`.
    pub fn with_traces(config: BatchConfig, traces: T) -> Self {
        Self { config, traces }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn traces(&self) -> &T {
        &self.traces
    }

    /// Run all repetitions of one scenario sequentially.
    ///
    /// The first failing repetition aborts the scenario.
    pub fn run_scenario(&self, scenario: &ScenarioConfig) -> BatchResult<ResultRow> {
        let mut seed = scenario.seed;
        let mut total = 0.0;

        for _ in 0..self.config.repetitions {
            let trial = scenario.with_seed(seed);
            let mut sim = Simulator::new(&trial)?;
            total += match &scenario.log_path {
                Some(path) => sim.run(&mut self.traces.open(path)?),
                None => sim.run(&mut NoopObserver),
            };
            seed = seed.wrapping_add(self.config.seed_stride);
        }

        let average = if self.config.repetitions == 0 {
            0.0
        } else {
            total / self.config.repetitions as f64
        };

        Ok(ResultRow {
            model_kind:       scenario.model_kind.clone(),
            final_seed:       seed,
            agent_count:      scenario.agent_count,
            comm_radius:      scenario.comm_radius,
            log_path:         scenario.log_path.clone(),
            average_coverage: round2(average),
        })
    }

    /// Run every scenario and return one slot per scenario, in submission
    /// order.  A failed scenario is logged and leaves its slot `None`.
    ///
    /// Fails only if the worker pool cannot be built.
    pub fn run(&self, scenarios: &[ScenarioConfig]) -> BatchResult<Vec<Option<ResultRow>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .thread_name(|i| format!("cov-batch-{i}"))
            .build()?;

        info!(
            scenarios   = scenarios.len(),
            repetitions = self.config.repetitions,
            workers     = pool.current_num_threads(),
            "starting batch"
        );

        let slots: Vec<Option<ResultRow>> = pool.install(|| {
            scenarios
                .par_iter()
                .with_max_len(1)
                .enumerate()
                .map(|(index, scenario)| self.run_slot(index, scenario))
                .collect()
        });

        let completed = slots.iter().filter(|s| s.is_some()).count();
        info!(completed, failed = slots.len() - completed, "batch finished");
        Ok(slots)
    }

    /// Run every scenario, then write the successful rows to `sink` in
    /// submission order with a single flush.  Returns the number of rows
    /// written.
    pub fn run_into<S: ResultSink + ?Sized>(
        &self,
        scenarios: &[ScenarioConfig],
        sink:      &mut S,
    ) -> BatchResult<usize> {
        let rows: Vec<ResultRow> = self.run(scenarios)?.into_iter().flatten().collect();
        sink.write_rows(&rows)?;
        sink.finish()?;
        Ok(rows.len())
    }

    fn run_slot(&self, index: usize, scenario: &ScenarioConfig) -> Option<ResultRow> {
        match self.run_scenario(scenario) {
            Ok(row) => {
                debug!(
                    index,
                    model    = %row.model_kind,
                    seed     = scenario.seed,
                    coverage = %row.coverage_field(),
                    "scenario complete"
                );
                Some(row)
            }
            Err(e) => {
                error!(
                    index,
                    model    = %scenario.model_kind,
                    seed     = scenario.seed,
                    agents   = scenario.agent_count,
                    radius   = scenario.comm_radius,
                    log_path = ?scenario.log_path,
                    error    = %e,
                    "scenario failed; skipping"
                );
                None
            }
        }
    }
}
