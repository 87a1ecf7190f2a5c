use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid area {width}x{height} has no cells")]
    EmptyArea { width: u32, height: u32 },

    #[error("history window must hold at least one slot")]
    ZeroWindow,

    #[error("disk radius must be finite and non-negative, got {0}")]
    Radius(f64),
}

pub type GridResult<T> = Result<T, GridError>;
