//! Geometry error type.

use thiserror::Error;

/// Errors produced by the geometry crate.
///
/// The distance, bearing, and destination primitives are total over
/// finite inputs and never return these. Errors arise only at explicit
/// validation boundaries ([`GeoPoint::validated`]) and from the
/// argument checks of [`circle_boundary`].
///
/// [`GeoPoint::validated`]: crate::GeoPoint::validated
/// [`circle_boundary`]: crate::circle_boundary
#[derive(Debug, Error)]
pub enum GeoError {
    /// Latitude or longitude outside its valid range, or non-finite.
    #[error("invalid coordinate ({lat}, {lon}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Fewer boundary points than a polygon can have.
    #[error("circle boundary needs at least 3 points, got {got}")]
    InvalidPointCount { got: usize },

    /// Negative or non-finite circle radius.
    #[error("circle radius must be finite and non-negative, got {radius_m} m")]
    InvalidRadius { radius_m: f64 },
}

/// Convenience alias used throughout the workspace.
pub type GeoResult<T> = Result<T, GeoError>;
