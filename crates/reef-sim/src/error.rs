use reef_core::{Location, ReefError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("cannot place an agent at {location}: outside the {depth}x{width} field")]
    OutOfBounds {
        location: Location,
        depth:    usize,
        width:    usize,
    },

    #[error("cannot place an agent at {0}: cell is occupied")]
    CellOccupied(Location),

    #[error(transparent)]
    Core(#[from] ReefError),
}

pub type SimResult<T> = Result<T, SimError>;
