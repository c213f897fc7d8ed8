//! Tower-domain error type.

use thiserror::Error;

use tl_geo::{GeoBounds, GeoError};

use crate::ids::TowerId;

/// Errors produced by the tower crate.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Lookup with an id the field does not contain.
    #[error("tower {0} not found")]
    TowerNotFound(TowerId),

    /// Area with flipped or out-of-range edges.
    #[error("invalid bounds ({0})")]
    InvalidBounds(GeoBounds),

    /// Generation request above the per-call limit.
    #[error("cannot generate {requested} towers in one call (limit {max})")]
    TooManyTowers { requested: usize, max: usize },

    /// Malformed inventory row. Carries the offending line.
    #[error("inventory parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("geometry error: {0}")]
    Geo(#[from] GeoError),
}

/// Convenience alias used throughout the crate.
pub type FieldResult<T> = Result<T, FieldError>;
