//! Discretised exponential distributions fitted to vehicle traces.
//!
//! Each speed class owns two curves `a·e^(−b·x)`: one for the magnitude of a
//! speed change (support `0..=80`) and one for the magnitude of a heading
//! change in degrees (support `0..=180`).  Probabilities are the curve value
//! at each support point divided by the sum over the whole support, so the
//! amplitude `a` only matters through that normalisation.

use std::sync::OnceLock;

use cov_core::SimRng;

/// Largest speed-change magnitude that can be drawn.
pub const SPEED_CHANGE_MAX: u32 = 80;

/// Largest heading-change magnitude (degrees) that can be drawn.
pub const DIRECTION_CHANGE_MAX: u32 = 180;

// ── ExponentialTable ──────────────────────────────────────────────────────────

/// A probability mass function over `0..=support_max`.
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialTable {
    probs: Vec<f64>,
}

impl ExponentialTable {
    /// Tabulate `a·e^(−b·x)` over `0..=support_max` and normalise.
    pub fn new(a: f64, b: f64, support_max: u32) -> Self {
        let weights: Vec<f64> = (0..=support_max).map(|x| a * (-b * x as f64).exp()).collect();
        let total: f64 = weights.iter().sum();
        let probs = if total > 0.0 && total.is_finite() {
            weights.into_iter().map(|w| w / total).collect()
        } else {
            // Degenerate curve: no mass anywhere, so sampling always falls
            // through to the last support value.
            vec![0.0; weights.len()]
        };
        Self { probs }
    }

    /// Largest value in the support.
    pub fn support_max(&self) -> u32 {
        self.probs.len().saturating_sub(1) as u32
    }

    /// Probability of drawing exactly `value`.
    pub fn probability(&self, value: u32) -> Option<f64> {
        self.probs.get(value as usize).copied()
    }

    /// Draw one value using a single uniform `[0, 1)` sample from `rng`.
    pub fn sample(&self, rng: &mut SimRng) -> u32 {
        self.sample_at(rng.random::<f64>())
    }

    /// Inverse-CDF lookup: walk the support upwards accumulating mass and
    /// return the first value whose cumulative mass reaches `u`.  Returns the
    /// last support value if rounding keeps the total below `u`.
    pub fn sample_at(&self, u: f64) -> u32 {
        let mut cumulative = 0.0;
        for (value, p) in self.probs.iter().enumerate() {
            cumulative += p;
            if cumulative >= u {
                return value as u32;
            }
        }
        self.support_max()
    }
}

// ── SpeedClass ────────────────────────────────────────────────────────────────

/// One of four empirical speed bands, half-open in km/h.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpeedClass {
    /// `[0, 15)` km/h, yard manoeuvring.
    Crawl,
    /// `[15, 30)` km/h.
    Slow,
    /// `[30, 60)` km/h.
    Medium,
    /// `[60, ∞)` km/h.
    Fast,
}

impl SpeedClass {
    /// Classify an integer speed in m/s.
    ///
    /// The speed is truncated to whole m/s, converted to km/h and truncated
    /// again, matching the integer units the traces were binned in.
    pub fn of(speed_ms: f64) -> Self {
        match kmh(speed_ms) {
            i64::MIN..15 => SpeedClass::Crawl,
            15..30       => SpeedClass::Slow,
            30..60       => SpeedClass::Medium,
            _            => SpeedClass::Fast,
        }
    }

    fn index(self) -> usize {
        match self {
            SpeedClass::Crawl  => 0,
            SpeedClass::Slow   => 1,
            SpeedClass::Medium => 2,
            SpeedClass::Fast   => 3,
        }
    }

    /// The speed- and heading-change tables for this class.
    pub fn tables(self) -> &'static ClassTables {
        &all_tables()[self.index()]
    }
}

/// Integer m/s → integer km/h.
pub fn kmh(speed_ms: f64) -> i64 {
    (speed_ms.trunc() * 3.6).trunc() as i64
}

/// The pair of tables owned by one speed class.
#[derive(Clone, Debug)]
pub struct ClassTables {
    pub speed_change:     ExponentialTable,
    pub direction_change: ExponentialTable,
}

/// `(a, b)` for speed change, then `(a, b)` for heading change, per class.
/// Faster vehicles change speed in larger steps but turn less sharply.
const CURVES: [((f64, f64), (f64, f64)); 4] = [
    ((0.40, 0.35), (0.10, 0.060)),
    ((0.30, 0.25), (0.08, 0.080)),
    ((0.25, 0.18), (0.06, 0.110)),
    ((0.20, 0.12), (0.05, 0.150)),
];

fn all_tables() -> &'static [ClassTables; 4] {
    static TABLES: OnceLock<[ClassTables; 4]> = OnceLock::new();
    TABLES.get_or_init(|| {
        CURVES.map(|((sa, sb), (da, db))| ClassTables {
            speed_change:     ExponentialTable::new(sa, sb, SPEED_CHANGE_MAX),
            direction_change: ExponentialTable::new(da, db, DIRECTION_CHANGE_MAX),
        })
    })
}
