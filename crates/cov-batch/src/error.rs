//! Error types for cov-batch.

use cov_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("scenario construction failed: {0}")]
    Sim(#[from] SimError),

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// Raised by [`ResultSink`][crate::ResultSink] or
    /// [`TraceSinks`][crate::TraceSinks] implementations backed by files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised by [`TraceSinks`][crate::TraceSinks] implementations that
    /// cannot open or accept a trace; fails only the scenario that owns it.
    #[error("trace sink error for {path:?}: {reason}")]
    Trace { path: String, reason: String },
}

pub type BatchResult<T> = Result<T, BatchError>;
