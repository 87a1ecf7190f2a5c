//! Deterministic trial-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! A trial owns exactly one `SimRng`, seeded from the scenario seed of that
//! repetition.  The same handle is threaded explicitly through agent
//! creation and every per-step draw; nothing reads ambient randomness.
//! Reproducibility therefore depends on the draw *sequence*, not just the
//! seed: agents are created and stepped in ascending `AgentId` order, and
//! each mobility model documents the order of its own draws.
//!
//! Concurrent scenarios never share a `SimRng`; each batch task builds its
//! own from its own config.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for one trial.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed from a 64-bit value.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from a signed scenario seed.  The bit pattern is reused as-is,
    /// so negative seeds are distinct from their absolute values.
    pub fn from_scenario_seed(seed: i64) -> Self {
        Self::new(seed as u64)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    ///
    /// For `f64` this is uniform in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform in the closed interval `[lo, hi]`.  Returns `lo` when the
    /// interval is degenerate (`lo >= hi`) without consuming a draw.
    #[inline]
    pub fn uniform_closed(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        self.0.gen_range(lo..=hi)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Fair coin flip mapped to `-1` / `+1`.
    #[inline]
    pub fn sign(&mut self) -> i32 {
        if self.gen_bool(0.5) { 1 } else { -1 }
    }
}
