use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("unsupported mobility model {0:?}: expected RandomWaypoint, RandomDirection, or Enterprise")]
    UnsupportedModel(String),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
