//! Tower field: indexed tower storage plus spatial queries.
//!
//! # Spatial index
//!
//! Towers live in an R-tree (via `rstar`) keyed by equirectangular
//! coordinates `[lat, lon * cos(mean field latitude)]`.  A longitude
//! degree is cos(lat) shorter on the ground than a latitude degree, so
//! unscaled degrees would sort an east-west neighbour as farther than
//! an equally distant north-south one; with the scaling, one index
//! unit is the same number of metres along either axis and candidate
//! order matches great-circle order over a city-sized field.  Query
//! points and envelopes get the same transform, which keeps the tree's
//! envelope pruning consistent with the ordering metric.  The distance
//! a query actually reports is always recomputed as an exact
//! great-circle distance.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use tl_geo::{GeoBounds, GeoPoint, GeoResult};

use crate::error::{FieldError, FieldResult};
use crate::ids::TowerId;
use crate::tower::Tower;

/// Default search radius for nearest-tower queries (50 km).
pub const DEFAULT_MAX_DISTANCE_M: f64 = 50_000.0;

// ── R-tree tower entry ────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D point with the
/// associated `TowerId`.
#[derive(Clone)]
struct TowerEntry {
    point: [f64; 2], // [lat, lon * lon_scale]
    id: TowerId,
}

impl RTreeObject for TowerEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for TowerEntry {
    /// Squared Euclidean distance in index space.  Candidate ordering
    /// only; the exact great-circle distance is recomputed for every
    /// candidate a query returns, so reported distances and coverage
    /// verdicts never inherit the index-space approximation.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d_lat = self.point[0] - point[0];
        let d_lon = self.point[1] - point[1];
        d_lat * d_lat + d_lon * d_lon
    }
}

// ── Query results ─────────────────────────────────────────────────────────────

/// Answer to a nearest-tower query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearestTower {
    pub id: TowerId,
    /// Great-circle distance from the query point in metres.
    pub distance_m: f64,
    /// Whether the query point is served, per [`Tower::covers`].
    pub in_coverage: bool,
}

// ── TowerField ────────────────────────────────────────────────────────────────

/// An immutable set of towers with a spatial index.
///
/// Ids are assigned in insertion order.  Queries skip inactive towers,
/// but inactive towers keep their ids and stay addressable by lookup.
/// Do not construct directly; use [`TowerFieldBuilder`].
pub struct TowerField {
    towers: Vec<Tower>,
    spatial_idx: RTree<TowerEntry>,
    /// Longitude scale of the index space: cos(mean tower latitude).
    lon_scale: f64,
}

impl TowerField {
    /// Construct a field with no towers.
    ///
    /// Every query against it answers "nothing": useful as a
    /// placeholder before an inventory is loaded.
    pub fn empty() -> Self {
        TowerFieldBuilder::new().build()
    }

    /// Number of towers, active or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.towers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    /// The tower with the given id, if the field contains it.
    #[inline]
    pub fn tower(&self, id: TowerId) -> Option<&Tower> {
        self.towers.get(id.index())
    }

    /// All towers in id order.
    #[inline]
    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = TowerId> + '_ {
        (0..self.towers.len() as u32).map(TowerId)
    }

    // ── Spatial queries ───────────────────────────────────────────────────────

    /// Nearest active tower to `pos` within `max_distance_m` metres.
    ///
    /// Returns `None` when no active tower is in range.  The answer
    /// carries the exact great-circle distance and the coverage verdict
    /// for that distance, so callers never re-derive either.
    pub fn nearest_tower(&self, pos: GeoPoint, max_distance_m: f64) -> Option<NearestTower> {
        let entry = self
            .spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon * self.lon_scale])
            .find(|e| self.towers[e.id.index()].active)?;

        let tower = &self.towers[entry.id.index()];
        let distance_m = tower.distance_to(pos);
        if distance_m > max_distance_m {
            return None;
        }

        Some(NearestTower {
            id: entry.id,
            distance_m,
            in_coverage: tower.covers(distance_m),
        })
    }

    /// Ids of all active towers inside `bounds`, in ascending order.
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidBounds`] if `bounds` has flipped or
    /// out-of-range edges, matching what [`generate_towers`] accepts.
    ///
    /// [`generate_towers`]: crate::generate_towers
    pub fn towers_in_bounds(&self, bounds: GeoBounds) -> FieldResult<Vec<TowerId>> {
        if !bounds.is_valid() {
            return Err(FieldError::InvalidBounds(bounds));
        }
        let envelope = AABB::from_corners(
            [bounds.south, bounds.west * self.lon_scale],
            [bounds.north, bounds.east * self.lon_scale],
        );
        let mut ids: Vec<TowerId> = self
            .spatial_idx
            .locate_in_envelope(&envelope)
            .filter(|e| self.towers[e.id.index()].active)
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Coverage ring for one tower by id.
    pub fn boundary(&self, id: TowerId, num_points: usize) -> FieldResult<Vec<GeoPoint>> {
        let tower = self.tower(id).ok_or(FieldError::TowerNotFound(id))?;
        Ok(tower.coverage_boundary(num_points)?)
    }

    /// Coverage rings for every tower, indexed by id.
    ///
    /// Includes inactive towers so callers can render them greyed out.
    /// With the `parallel` feature the rings are computed on Rayon's
    /// thread pool; the output is identical either way.
    pub fn coverage_boundaries(&self, num_points: usize) -> GeoResult<Vec<Vec<GeoPoint>>> {
        #[cfg(not(feature = "parallel"))]
        {
            self.towers
                .iter()
                .map(|t| t.coverage_boundary(num_points))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.towers
                .par_iter()
                .map(|t| t.coverage_boundary(num_points))
                .collect()
        }
    }
}

// ── TowerFieldBuilder ─────────────────────────────────────────────────────────

/// Construct a [`TowerField`] incrementally, then call
/// [`build`](Self::build).
///
/// The builder accepts towers in any order; `build()` bulk-loads the
/// R-tree in one pass.
///
/// # Example
///
/// ```
/// use tl_geo::GeoPoint;
/// use tl_towers::{Tower, TowerFieldBuilder};
///
/// let mut b = TowerFieldBuilder::new();
/// let id = b.add_tower(Tower::new("Central", GeoPoint::new(50.45, 30.52)));
/// let field = b.build();
/// assert_eq!(field.len(), 1);
/// assert_eq!(field.tower(id).unwrap().name, "Central");
/// ```
pub struct TowerFieldBuilder {
    towers: Vec<Tower>,
}

impl TowerFieldBuilder {
    pub fn new() -> Self {
        Self { towers: Vec::new() }
    }

    /// Pre-allocate for the expected number of towers (the generator
    /// and loader both know their counts up front).
    pub fn with_capacity(towers: usize) -> Self {
        Self { towers: Vec::with_capacity(towers) }
    }

    /// Add one tower and return its `TowerId` (sequential from 0).
    pub fn add_tower(&mut self, tower: Tower) -> TowerId {
        let id = TowerId(self.towers.len() as u32);
        self.towers.push(tower);
        id
    }

    /// Add every tower from an iterator, e.g. the generator or loader
    /// output.
    pub fn add_towers<I>(&mut self, towers: I) -> &mut Self
    where
        I: IntoIterator<Item = Tower>,
    {
        self.towers.extend(towers);
        self
    }

    /// Number of towers added so far.
    pub fn tower_count(&self) -> usize {
        self.towers.len()
    }

    /// Consume the builder and produce a [`TowerField`].
    ///
    /// Bulk-loads the R-tree for O(n log n) construction (faster than
    /// n inserts).
    pub fn build(self) -> TowerField {
        // One scale for the whole field; per-tower scales would leave
        // stored points in different spaces.
        let lon_scale = if self.towers.is_empty() {
            1.0
        } else {
            let mean_lat = self.towers.iter().map(|t| t.position.lat).sum::<f64>()
                / self.towers.len() as f64;
            mean_lat.to_radians().cos()
        };

        let entries: Vec<TowerEntry> = self
            .towers
            .iter()
            .enumerate()
            .map(|(i, t)| TowerEntry {
                point: [t.position.lat, t.position.lon * lon_scale],
                id: TowerId(i as u32),
            })
            .collect();

        TowerField {
            towers: self.towers,
            spatial_idx: RTree::bulk_load(entries),
            lon_scale,
        }
    }
}

impl Default for TowerFieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}
