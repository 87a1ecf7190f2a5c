use cov_core::CovError;
use cov_grid::GridError;
use cov_mobility::MobilityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CovError),

    #[error(transparent)]
    Mobility(#[from] MobilityError),

    #[error("coverage grid: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
