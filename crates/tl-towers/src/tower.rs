//! Tower record and the coverage rule.

use std::fmt;

use tl_geo::{GeoPoint, GeoResult, circle_boundary};

/// Metres per kilometre.
///
/// The single conversion point for kilometre-denominated inputs (the
/// inventory CSV column, display formatting). Everything below this
/// boundary is metres.
pub const M_PER_KM: f64 = 1_000.0;

/// Coverage radius assigned to towers that do not specify one (1 km).
pub const DEFAULT_COVERAGE_RADIUS_M: f64 = 1_000.0;

/// Floor of the coverage tolerance in metres.
pub const COVERAGE_TOLERANCE_FLOOR_M: f64 = 150.0;

/// Coverage tolerance as a fraction of the coverage radius.
pub const COVERAGE_TOLERANCE_RATIO: f64 = 0.15;

// ── TowerKind ─────────────────────────────────────────────────────────────────

/// Radio generation a tower serves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TowerKind {
    /// UMTS-era tower.
    ThreeG,
    /// LTE tower (default for generated inventories).
    #[default]
    FourG,
    /// NR tower.
    FiveG,
}

impl TowerKind {
    /// Short label, matching the inventory CSV values.
    pub fn as_str(self) -> &'static str {
        match self {
            TowerKind::ThreeG => "3G",
            TowerKind::FourG  => "4G",
            TowerKind::FiveG  => "5G",
        }
    }
}

impl fmt::Display for TowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tower ─────────────────────────────────────────────────────────────────────

/// A cell tower with a circular coverage area.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tower {
    pub name: String,
    pub position: GeoPoint,
    pub kind: TowerKind,
    /// Signal strength in [0, 100].
    pub signal_strength: f64,
    /// Inactive towers keep their id but are skipped by every query.
    pub active: bool,
    /// Coverage radius in metres.
    pub coverage_radius_m: f64,
}

impl Tower {
    /// An active tower with the default kind, radius, and full signal.
    pub fn new(name: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            position,
            kind: TowerKind::default(),
            signal_strength: 100.0,
            active: true,
            coverage_radius_m: DEFAULT_COVERAGE_RADIUS_M,
        }
    }

    /// Great-circle distance from this tower to `p` in metres.
    #[inline]
    pub fn distance_to(&self, p: GeoPoint) -> f64 {
        self.position.distance_m(p)
    }

    /// `true` if a point `distance_m` metres away counts as served.
    ///
    /// The verdict allows `max(150 m, 15 % of the radius)` of slack
    /// beyond the nominal radius. The slack absorbs click imprecision
    /// and the gap between the true circle and the inscribed polygon it
    /// is rendered as, so the verdict never contradicts the drawn area.
    #[inline]
    pub fn covers(&self, distance_m: f64) -> bool {
        let tolerance =
            COVERAGE_TOLERANCE_FLOOR_M.max(self.coverage_radius_m * COVERAGE_TOLERANCE_RATIO);
        distance_m <= self.coverage_radius_m + tolerance
    }

    /// The coverage outline as a geodesic ring of `num_points` vertices.
    ///
    /// See [`circle_boundary`] for ordering and error conditions.
    pub fn coverage_boundary(&self, num_points: usize) -> GeoResult<Vec<GeoPoint>> {
        circle_boundary(self.position, self.coverage_radius_m, num_points)
    }
}
