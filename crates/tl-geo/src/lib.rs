//! `tl-geo` — spherical geodesy core for the tower_locator toolkit.
//!
//! Everything downstream of this crate (tower fields, coverage
//! verdicts, demos) works in decimal degrees and metres; this crate
//! owns the coordinate type and the math that connects the two.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`point`]    | [`GeoPoint`] and the distance/bearing/destination math |
//! | [`boundary`] | Geodesic circle rings ([`circle_boundary`])            |
//! | [`bounds`]   | Axis-aligned lat/lon boxes ([`GeoBounds`])             |
//! | [`error`]    | [`GeoError`] and the [`GeoResult`] alias               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                      |
//! |---------|---------------------------------------------|
//! | `serde` | Serialize/Deserialize on all public types   |

pub mod boundary;
pub mod bounds;
pub mod error;
pub mod point;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use boundary::{DEFAULT_CIRCLE_POINTS, circle_boundary};
pub use bounds::GeoBounds;
pub use error::{GeoError, GeoResult};
pub use point::{EARTH_RADIUS_M, GeoPoint, normalize_lon};
