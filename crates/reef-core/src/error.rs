//! Simulation error type.
//!
//! Sub-crates define their own error enums and wrap `ReefError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Location;

/// The top-level error type for `reef-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ReefError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("location {location} is outside a {depth}x{width} field")]
    OutOfBounds {
        location: Location,
        depth:    usize,
        width:    usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `reef-*` crates.
pub type ReefResult<T> = Result<T, ReefError>;
