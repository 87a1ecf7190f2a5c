//! Batch-level execution settings.

/// How a batch is executed.  Per-scenario parameters live in
/// [`cov_core::ScenarioConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Trials per scenario.
    pub repetitions: u32,

    /// Upper bound on concurrently running scenarios.  `0` lets Rayon pick
    /// (one thread per logical CPU).
    pub workers: usize,

    /// Added to the seed after every repetition.
    pub seed_stride: i64,
}

impl BatchConfig {
    pub const DEFAULT_REPETITIONS: u32 = 1000;
    pub const DEFAULT_WORKERS: usize = 12;
    pub const DEFAULT_SEED_STRIDE: i64 = 10;

    /// Seed a scenario ends on after all of its repetitions.
    pub fn final_seed(&self, start: i64) -> i64 {
        start.wrapping_add(self.seed_stride.wrapping_mul(self.repetitions as i64))
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            repetitions: Self::DEFAULT_REPETITIONS,
            workers:     Self::DEFAULT_WORKERS,
            seed_stride: Self::DEFAULT_SEED_STRIDE,
        }
    }
}
