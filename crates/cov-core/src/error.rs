//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CovError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `cov-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CovError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid area {width}x{height}: both sides must be positive")]
    EmptyArea { width: u32, height: u32 },

    #[error("invalid speed range [{min}, {max}]")]
    SpeedRange { min: f64, max: f64 },
}

/// Shorthand result type for `cov-core`.
pub type CovResult<T> = Result<T, CovError>;
