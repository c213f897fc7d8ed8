//! Axis-aligned geographic bounding box.

use std::fmt;

use crate::point::GeoPoint;

/// An axis-aligned latitude/longitude box with inclusive edges.
///
/// Boxes that would wrap the antimeridian (east < west) or enclose a
/// pole are not supported; queries over such areas must be split by the
/// caller.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// Create a box from its four edges. No ordering check, see
    /// [`GeoBounds::is_valid`].
    #[inline]
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self { north, south, east, west }
    }

    /// The box whose edges lie `radius_m` metres due north, south,
    /// east, and west of `center`.
    pub fn around(center: GeoPoint, radius_m: f64) -> Self {
        Self {
            north: center.destination(0.0, radius_m).lat,
            south: center.destination(180.0, radius_m).lat,
            east: center.destination(90.0, radius_m).lon,
            west: center.destination(270.0, radius_m).lon,
        }
    }

    /// `true` if `p` lies inside the box, edges included.
    #[inline]
    pub fn contains(self, p: GeoPoint) -> bool {
        p.lat >= self.south && p.lat <= self.north && p.lon >= self.west && p.lon <= self.east
    }

    /// `true` if every edge is in coordinate range and the edges are
    /// ordered (north at or above south, east at or above west).
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.south)
            && (-90.0..=90.0).contains(&self.north)
            && (-180.0..=180.0).contains(&self.west)
            && (-180.0..=180.0).contains(&self.east)
            && self.north >= self.south
            && self.east >= self.west
    }

    /// Geometric centre of the box.
    #[inline]
    pub fn center(self) -> GeoPoint {
        GeoPoint::new((self.north + self.south) * 0.5, (self.east + self.west) * 0.5)
    }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat {:.4}..{:.4}, lon {:.4}..{:.4}",
            self.south, self.north, self.west, self.east
        )
    }
}
