//! `cov-batch` — many scenarios, many repetitions, one ordered result set.
//!
//! # Execution model
//!
//! ```text
//! scenarios ──par_iter (≤ workers threads, one task per scenario)──┐
//!   task i:  for rep in 0..repetitions:                            │
//!              Simulator::new(config.with_seed(seed)).run()        │
//!              seed += seed_stride                                 │
//!            mean → round to 2 dp → ResultRow                      │
//!   slot[i] = Some(row) | None (failure logged, siblings go on) ◄──┘
//! join → flatten slots in submission order → ResultSink (one flush)
//! ```
//!
//! Tasks share nothing: each owns its RNG stream, agents, and grid.  Results
//! are written to per-task slots indexed by submission order, so output is
//! identical regardless of which task finishes first.

pub mod config;
pub mod error;
pub mod row;
pub mod runner;
pub mod sink;

#[cfg(test)]
mod tests;

pub use config::BatchConfig;
pub use error::{BatchError, BatchResult};
pub use row::ResultRow;
pub use runner::BatchRunner;
pub use sink::{MemoryTraces, NoTraces, ResultSink, TraceBuffer, TraceSinks};
