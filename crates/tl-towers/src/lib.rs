//! `tl-towers` — tower records, spatial queries, and inventory tooling
//! for the tower_locator toolkit.
//!
//! The crate answers the three questions the Tower Locator flow asks:
//! which tower is nearest to a point, is that point inside the tower's
//! coverage, and what does the coverage area look like. Fields come
//! from either the seeded random generator or a CSV inventory.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | [`TowerId`]                                           |
//! | [`tower`]    | [`Tower`], [`TowerKind`], and the coverage rule       |
//! | [`field`]    | [`TowerField`]: R-tree index and queries              |
//! | [`generate`] | Seeded random placement ([`generate_towers`])         |
//! | [`loader`]   | CSV inventory loading ([`load_towers_csv`])           |
//! | [`error`]    | [`FieldError`] and the [`FieldResult`] alias          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `serde`    | Serialize/Deserialize on all public types           |
//! | `parallel` | Batch boundary computation on Rayon's thread pool   |

pub mod error;
pub mod field;
pub mod generate;
pub mod ids;
pub mod loader;
pub mod tower;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FieldError, FieldResult};
pub use field::{DEFAULT_MAX_DISTANCE_M, NearestTower, TowerField, TowerFieldBuilder};
pub use generate::{DEFAULT_TOWER_COUNT, GeneratorConfig, MAX_GENERATED_TOWERS, generate_towers};
pub use ids::TowerId;
pub use loader::{load_towers_csv, load_towers_reader};
pub use tower::{
    COVERAGE_TOLERANCE_FLOOR_M, COVERAGE_TOLERANCE_RATIO, DEFAULT_COVERAGE_RADIUS_M, M_PER_KM,
    Tower, TowerKind,
};
