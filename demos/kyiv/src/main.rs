//! kyiv — end-to-end walkthrough of the tower_locator toolkit.
//!
//! Seeds a random tower field over central Kyiv, simulates a user
//! clicking the map, and reports the nearest tower, the coverage
//! verdict, and the boundary ring a map widget would draw.  This is the
//! whole Tower Locator flow minus the map itself; swap the generated
//! field for a CSV inventory via `load_towers_csv` to run on real data.

use anyhow::Result;

use tl_geo::{DEFAULT_CIRCLE_POINTS, GeoBounds, GeoPoint};
use tl_towers::{
    DEFAULT_MAX_DISTANCE_M, GeneratorConfig, M_PER_KM, TowerFieldBuilder, generate_towers,
};

// ── Scenario constants ────────────────────────────────────────────────────────

/// Kyiv city centre (Maidan Nezalezhnosti).
const CENTER:          GeoPoint = GeoPoint { lat: 50.4501, lon: 30.5234 };

/// Half-extent of the generation area around the centre, degrees.
const AREA_LAT_OFFSET: f64      = 0.025;
const AREA_LON_OFFSET: f64      = 0.035;

/// Simulated map click, a little north-west of the centre.
const CLICK:           GeoPoint = GeoPoint { lat: 50.4580, lon: 30.5100 };

const SEED:            u64      = 42;

fn main() -> Result<()> {
    println!("=== kyiv — tower_locator coverage demo ===");
    println!("Centre: {CENTER}  |  Seed: {SEED}");
    println!();

    // 1. Stake out the area the towers will be placed in.
    let area = GeoBounds::new(
        CENTER.lat + AREA_LAT_OFFSET,
        CENTER.lat - AREA_LAT_OFFSET,
        CENTER.lon + AREA_LON_OFFSET,
        CENTER.lon - AREA_LON_OFFSET,
    );
    println!("Generation area: {area}");

    // 2. Seed a reproducible tower field and index it.
    let towers = generate_towers(&GeneratorConfig::new(area, SEED))?;
    let mut builder = TowerFieldBuilder::with_capacity(towers.len());
    builder.add_towers(towers);
    let field = builder.build();
    println!("Generated and indexed {} towers", field.len());
    println!();

    // 3. Simulate the map click and locate the serving tower.
    println!("Click at {CLICK}");
    match field.nearest_tower(CLICK, DEFAULT_MAX_DISTANCE_M) {
        None => println!(
            "  no active tower within {}",
            format_distance(DEFAULT_MAX_DISTANCE_M)
        ),
        Some(hit) => {
            let tower = &field.towers()[hit.id.index()];
            println!(
                "  nearest tower : {} ({}) — {} away, bearing {:.0} deg",
                tower.name,
                tower.kind,
                format_distance(hit.distance_m),
                CLICK.bearing_to(tower.position),
            );
            println!(
                "  coverage      : {} (radius {}, signal {:.1}%)",
                if hit.in_coverage { "INSIDE" } else { "outside" },
                format_distance(tower.coverage_radius_m),
                tower.signal_strength,
            );

            // 4. The ring a map widget would draw for that tower.
            let ring = field.boundary(hit.id, DEFAULT_CIRCLE_POINTS)?;
            let north = ring.iter().map(|p| p.lat).fold(f64::NEG_INFINITY, f64::max);
            let south = ring.iter().map(|p| p.lat).fold(f64::INFINITY, f64::min);
            println!(
                "  boundary ring : {} vertices, lat span {south:.4}..{north:.4}",
                ring.len(),
            );
        }
    }
    println!();

    // 5. Towers inside the viewport a map would show around the click.
    let viewport = GeoBounds::around(CLICK, 2_000.0);
    let visible = field.towers_in_bounds(viewport)?;
    println!("Active towers within the 2 km viewport: {}", visible.len());
    println!();

    // 6. Inventory summary.
    println!("{:<4} {:<10} {:<5} {:<8} {:<9} {:<24}", "Id", "Name", "Type", "Signal", "Radius", "Position");
    println!("{}", "-".repeat(62));
    for (i, t) in field.towers().iter().enumerate() {
        println!(
            "{:<4} {:<10} {:<5} {:<8} {:<9} {:<24}",
            i,
            t.name,
            t.kind.to_string(),
            format!("{:.1}%", t.signal_strength),
            format_distance(t.coverage_radius_m),
            t.position.to_string(),
        );
    }

    Ok(())
}

/// Metres below one kilometre, two-decimal kilometres above.
fn format_distance(distance_m: f64) -> String {
    if distance_m < M_PER_KM {
        format!("{distance_m:.0} m")
    } else {
        format!("{:.2} km", distance_m / M_PER_KM)
    }
}
