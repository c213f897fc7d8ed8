//! Deterministic random tower placement.
//!
//! Placement draws from a `SmallRng` seeded with the config's master
//! seed, so one config always produces one field. Demo runs and tests
//! are reproducible without fixture files.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use tl_geo::{GeoBounds, GeoError, GeoPoint};

use crate::error::{FieldError, FieldResult};
use crate::tower::{DEFAULT_COVERAGE_RADIUS_M, Tower, TowerKind};

/// Stock tower count for a generation run.
pub const DEFAULT_TOWER_COUNT: usize = 20;

/// Upper bound on one generation call.
pub const MAX_GENERATED_TOWERS: usize = 1_000;

/// Generated signal strengths are uniform in `[SIGNAL_MIN, SIGNAL_MAX)`.
const SIGNAL_MIN: f64 = 75.0;
const SIGNAL_MAX: f64 = 100.0;

/// Parameters for one generation run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// How many towers to place, at most [`MAX_GENERATED_TOWERS`].
    pub count: usize,
    /// Area to place them in, uniform over latitude and longitude.
    pub bounds: GeoBounds,
    /// Master seed. Identical configs produce identical towers.
    pub seed: u64,
    /// Coverage radius assigned to every generated tower, metres.
    pub coverage_radius_m: f64,
    /// Radio kind assigned to every generated tower.
    pub kind: TowerKind,
}

impl GeneratorConfig {
    /// Stock config: 20 towers, 1 km radius, 4G.
    pub fn new(bounds: GeoBounds, seed: u64) -> Self {
        Self {
            count: DEFAULT_TOWER_COUNT,
            bounds,
            seed,
            coverage_radius_m: DEFAULT_COVERAGE_RADIUS_M,
            kind: TowerKind::default(),
        }
    }
}

/// Place `cfg.count` towers uniformly inside `cfg.bounds`.
///
/// Towers come out named `Tower_1` through `Tower_N` in draw order,
/// active, with signal strength uniform in [75, 100).
///
/// # Errors
///
/// - [`FieldError::TooManyTowers`] if `cfg.count` exceeds
///   [`MAX_GENERATED_TOWERS`].
/// - [`FieldError::InvalidBounds`] if the area is malformed.
/// - [`FieldError::Geo`] if the coverage radius is negative or
///   non-finite.
pub fn generate_towers(cfg: &GeneratorConfig) -> FieldResult<Vec<Tower>> {
    if cfg.count > MAX_GENERATED_TOWERS {
        return Err(FieldError::TooManyTowers {
            requested: cfg.count,
            max: MAX_GENERATED_TOWERS,
        });
    }
    if !cfg.bounds.is_valid() {
        return Err(FieldError::InvalidBounds(cfg.bounds));
    }
    if !cfg.coverage_radius_m.is_finite() || cfg.coverage_radius_m < 0.0 {
        return Err(GeoError::InvalidRadius { radius_m: cfg.coverage_radius_m }.into());
    }

    let mut rng = SmallRng::seed_from_u64(cfg.seed);
    let towers = (0..cfg.count)
        .map(|i| Tower {
            name: format!("Tower_{}", i + 1),
            position: GeoPoint::new(
                rng.gen_range(cfg.bounds.south..=cfg.bounds.north),
                rng.gen_range(cfg.bounds.west..=cfg.bounds.east),
            ),
            kind: cfg.kind,
            signal_strength: rng.gen_range(SIGNAL_MIN..SIGNAL_MAX),
            active: true,
            coverage_radius_m: cfg.coverage_radius_m,
        })
        .collect();

    Ok(towers)
}
