//! CSV tower-inventory loader.
//!
//! # CSV format
//!
//! One row per tower, with a header:
//!
//! ```csv
//! name,latitude,longitude,signal_strength,tower_type,active,coverage_radius_km
//! Central_North,50.4711,30.5180,92.5,4G,true,1.0
//! Podil_Riverside,50.4622,30.5201,88.0,5G,true,0.8
//! Obolon_Cold,50.5010,30.4980,60.0,3G,false,1.2
//! ```
//!
//! `coverage_radius_km` is the one kilometre-denominated column in the
//! toolkit (inventory files predate the metres-canonical API); it is
//! converted through [`M_PER_KM`] here and nowhere else.
//!
//! A malformed row fails the whole load with the offending line in the
//! error. In particular, an out-of-range coordinate is an error, never
//! a silently substituted default location.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tl_geo::GeoPoint;

use crate::error::{FieldError, FieldResult};
use crate::tower::{M_PER_KM, Tower, TowerKind};

// ── CSV record ────────────────────────────────────────────────────────────────

/// One row of the inventory file, as deserialized by `csv`.
#[derive(Debug, Deserialize)]
struct TowerRecord {
    name: String,
    latitude: f64,
    longitude: f64,
    signal_strength: f64,
    tower_type: String,
    active: bool,
    coverage_radius_km: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a tower inventory from a CSV file at `path`.
pub fn load_towers_csv(path: &Path) -> FieldResult<Vec<Tower>> {
    let file = std::fs::File::open(path)?;
    load_towers_reader(file)
}

/// Load a tower inventory from any reader (used by tests with
/// in-memory CSV).
pub fn load_towers_reader<R: Read>(reader: R) -> FieldResult<Vec<Tower>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut towers = Vec::new();

    for (i, result) in rdr.deserialize::<TowerRecord>().enumerate() {
        // Line 1 is the header, so record i sits on line i + 2.
        let line = i + 2;
        let record = result.map_err(|e| FieldError::Parse(format!("line {line}: {e}")))?;
        towers.push(tower_from_record(record, line)?);
    }

    Ok(towers)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tower_from_record(record: TowerRecord, line: usize) -> FieldResult<Tower> {
    let position = GeoPoint::validated(record.latitude, record.longitude)
        .map_err(|e| FieldError::Parse(format!("line {line}: {e}")))?;

    if !(0.0..=100.0).contains(&record.signal_strength) {
        return Err(FieldError::Parse(format!(
            "line {line}: signal_strength {} outside [0, 100]",
            record.signal_strength
        )));
    }

    let coverage_radius_m = record.coverage_radius_km * M_PER_KM;
    if !coverage_radius_m.is_finite() || coverage_radius_m < 0.0 {
        return Err(FieldError::Parse(format!(
            "line {line}: coverage_radius_km {} must be finite and non-negative",
            record.coverage_radius_km
        )));
    }

    Ok(Tower {
        name: record.name,
        position,
        kind: parse_kind(&record.tower_type, line)?,
        signal_strength: record.signal_strength,
        active: record.active,
        coverage_radius_m,
    })
}

fn parse_kind(label: &str, line: usize) -> FieldResult<TowerKind> {
    match label.trim() {
        "3G" => Ok(TowerKind::ThreeG),
        "4G" => Ok(TowerKind::FourG),
        "5G" => Ok(TowerKind::FiveG),
        other => Err(FieldError::Parse(format!(
            "line {line}: invalid tower_type {other:?}: expected \"3G\", \"4G\", or \"5G\""
        ))),
    }
}
