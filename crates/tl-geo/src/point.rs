//! Geographic coordinate type and spherical geodesy primitives.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Coverage
//! checks compare boundary rings against radii down to one metre, which
//! needs sub-millimetre positional resolution — well beyond the ~1 m an
//! `f32` coordinate can carry at the equator.
//!
//! All distances are metres on a spherical Earth of radius
//! [`EARTH_RADIUS_M`].  The three primitives cover both geodesic
//! problems: [`GeoPoint::distance_m`] and [`GeoPoint::bearing_to`] solve
//! the inverse problem (two points → distance and course) and
//! [`GeoPoint::destination`] the direct one (point, course, distance →
//! end point).  All three are total over finite inputs; range validation
//! is an explicit caller-side step via [`GeoPoint::validated`], never a
//! silent fallback.

use crate::error::{GeoError, GeoResult};

/// Mean Earth radius in metres (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl GeoPoint {
    /// Unchecked constructor; see [`GeoPoint::validated`] for the
    /// range-checking one.
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a point only if both coordinates are in range.
    ///
    /// This is the validation boundary between external input (map
    /// clicks, CSV rows) and the total math below it.  Out-of-range and
    /// non-finite values are rejected here instead of being quietly
    /// replaced with a default location.
    pub fn validated(lat: f64, lon: f64) -> GeoResult<Self> {
        let p = Self { lat, lon };
        if p.is_valid() {
            Ok(p)
        } else {
            Err(GeoError::InvalidCoordinate { lat, lon })
        }
    }

    /// `true` if latitude is in [-90, 90] and longitude in [-180, 180].
    /// Non-finite coordinates never are.
    #[inline]
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, zero for identical points, and at most half the
    /// Earth's circumference (about 20 015 km) for antipodal pairs.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial bearing of the great circle toward `other`, in degrees
    /// [0, 360) clockwise from true north.
    ///
    /// Coincident points have no defined course; this returns 0.
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        y.atan2(x).to_degrees().rem_euclid(360.0)
    }

    /// The point `distance_m` metres from `self` along the great circle
    /// that leaves at `bearing_deg` degrees clockwise from north.
    ///
    /// The resulting longitude is reduced into [-180, 180) by
    /// [`normalize_lon`], so paths that cross the antimeridian land on
    /// the conventional side of it instead of running past 180.
    pub fn destination(self, bearing_deg: f64, distance_m: f64) -> GeoPoint {
        let bearing = bearing_deg.to_radians();
        let angular = distance_m / EARTH_RADIUS_M;

        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();

        // Rounding can push the sine one ulp past 1 when the path ends
        // at a pole; asin of that is NaN.
        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos())
            .clamp(-1.0, 1.0)
            .asin();
        let lon2 = lon1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        GeoPoint {
            lat: lat2.to_degrees(),
            lon: normalize_lon(lon2.to_degrees()),
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Reduce a longitude in degrees into [-180, 180).
///
/// Plain modular reduction; +180 maps to -180 (the same meridian).
/// Total for all finite inputs, however many turns out of range.
#[inline]
pub fn normalize_lon(lon_deg: f64) -> f64 {
    (lon_deg + 180.0).rem_euclid(360.0) - 180.0
}
