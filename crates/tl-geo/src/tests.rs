//! Unit tests for the geodesy primitives.

#[cfg(test)]
mod point {
    use crate::{GeoError, GeoPoint, normalize_lon};

    #[test]
    fn validated_in_range() {
        let p = GeoPoint::validated(50.4501, 30.5234).unwrap();
        assert_eq!(p, GeoPoint::new(50.4501, 30.5234));

        // Range edges are valid.
        assert!(GeoPoint::validated(90.0, 180.0).is_ok());
        assert!(GeoPoint::validated(-90.0, -180.0).is_ok());
    }

    #[test]
    fn validated_rejects_out_of_range() {
        for (lat, lon) in [
            (90.01, 0.0),
            (-90.01, 0.0),
            (0.0, 180.5),
            (0.0, -180.5),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ] {
            let err = GeoPoint::validated(lat, lon).unwrap_err();
            assert!(
                matches!(err, GeoError::InvalidCoordinate { .. }),
                "expected InvalidCoordinate for ({lat}, {lon})"
            );
        }
    }

    #[test]
    fn display() {
        let p = GeoPoint::new(50.4501, 30.5234);
        assert_eq!(p.to_string(), "(50.450100, 30.523400)");
    }

    #[test]
    fn normalize_lon_reduces_into_range() {
        assert_eq!(normalize_lon(0.0), 0.0);
        assert_eq!(normalize_lon(179.5), 179.5);
        assert_eq!(normalize_lon(-179.5), -179.5);
        assert_eq!(normalize_lon(181.0), -179.0);
        assert_eq!(normalize_lon(-181.0), 179.0);
        assert_eq!(normalize_lon(360.0), 0.0);
        assert_eq!(normalize_lon(540.0), -180.0);
        // +180 and -180 are the same meridian; both map to -180.
        assert_eq!(normalize_lon(180.0), -180.0);
        assert_eq!(normalize_lon(-180.0), -180.0);
    }
}

#[cfg(test)]
mod distance {
    use crate::{EARTH_RADIUS_M, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(48.1351, 11.5820);
        let d = p.distance_m(p);
        assert!(d.abs() < 1e-9, "got {d}");
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (GeoPoint::new(50.4501, 30.5234), GeoPoint::new(40.6892, -74.0445)),
            (GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(35.6762, 139.6503)),
            (GeoPoint::new(78.2232, 15.6267), GeoPoint::new(77.8750, 20.9752)),
        ];
        for (a, b) in pairs {
            let ab = a.distance_m(b);
            let ba = b.distance_m(a);
            assert!((ab - ba).abs() <= ab * 1e-6, "{ab} vs {ba}");
        }
    }

    #[test]
    fn london_eye_to_statue_of_liberty() {
        let london_eye = GeoPoint::new(51.5007, -0.1246);
        let liberty = GeoPoint::new(40.6892, -74.0445);
        let d = london_eye.distance_m(liberty);
        // Known transatlantic reference distance, within 1 %.
        assert!((d - 5_574_000.0).abs() < 55_740.0, "got {d}");
    }

    #[test]
    fn one_degree_latitude_approx() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(50.0, 30.0);
        let b = GeoPoint::new(51.0, 30.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn antipodal_max() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = a.distance_m(b);
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_M;
        assert!((d - half_circumference).abs() < 1.0, "got {d}");
    }
}

#[cfg(test)]
mod bearing {
    use crate::GeoPoint;

    #[test]
    fn cardinal_directions_at_equator() {
        let origin = GeoPoint::new(0.0, 0.0);
        let cases = [
            (GeoPoint::new(1.0, 0.0), 0.0),
            (GeoPoint::new(0.0, 1.0), 90.0),
            (GeoPoint::new(-1.0, 0.0), 180.0),
            (GeoPoint::new(0.0, -1.0), 270.0),
        ];
        for (target, expected) in cases {
            let b = origin.bearing_to(target);
            assert!((b - expected).abs() < 1e-6, "expected {expected}, got {b}");
        }
    }

    #[test]
    fn always_in_zero_to_360() {
        let a = GeoPoint::new(50.4501, 30.5234);
        let targets = [
            GeoPoint::new(40.6892, -74.0445),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(50.4501, 30.5233),
            GeoPoint::new(50.4502, 30.5234),
        ];
        for t in targets {
            let b = a.bearing_to(t);
            assert!((0.0..360.0).contains(&b), "got {b}");
        }
    }

    #[test]
    fn coincident_points_bear_north() {
        let p = GeoPoint::new(50.4501, 30.5234);
        assert_eq!(p.bearing_to(p), 0.0);
    }

    #[test]
    fn matches_destination_bearing() {
        let start = GeoPoint::new(48.1351, 11.5820);
        let dest = start.destination(37.0, 5_000.0);
        let b = start.bearing_to(dest);
        assert!((b - 37.0).abs() < 0.01, "got {b}");
    }
}

#[cfg(test)]
mod destination {
    use crate::{EARTH_RADIUS_M, GeoPoint};

    #[test]
    fn round_trips_through_distance() {
        let start = GeoPoint::new(50.4501, 30.5234);
        for bearing in [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0] {
            let dest = start.destination(bearing, 1_000.0);
            let d = start.distance_m(dest);
            assert!((d - 1_000.0).abs() < 1e-3, "bearing {bearing}: got {d}");
        }
    }

    #[test]
    fn zero_distance_is_identity() {
        let start = GeoPoint::new(-12.0463, -77.0428);
        let dest = start.destination(123.0, 0.0);
        assert!((dest.lat - start.lat).abs() < 1e-12, "got {}", dest.lat);
        assert!((dest.lon - start.lon).abs() < 1e-12, "got {}", dest.lon);
    }

    #[test]
    fn due_north_moves_latitude_only() {
        let start = GeoPoint::new(50.0, 30.0);
        let dest = start.destination(0.0, 10_000.0);
        assert!(dest.lat > start.lat);
        assert!((dest.lon - start.lon).abs() < 1e-9, "got {}", dest.lon);
    }

    #[test]
    fn wraps_across_the_antimeridian() {
        let start = GeoPoint::new(0.0, 179.9999);
        let dest = start.destination(90.0, 10_000.0);
        assert!((-180.0..0.0).contains(&dest.lon), "got {}", dest.lon);
    }

    #[test]
    fn path_ending_at_a_pole_stays_finite() {
        // At this latitude the destination-latitude sine rounds to one
        // ulp above 1; unclamped, asin would return NaN.
        let start = GeoPoint::new(33.479, 11.0);
        let to_pole = (90.0 - start.lat).to_radians() * EARTH_RADIUS_M;
        let dest = start.destination(0.0, to_pole);
        assert!(dest.lat.is_finite() && dest.lon.is_finite(), "got {dest}");
        assert!((dest.lat - 90.0).abs() < 1e-5, "got {}", dest.lat);
    }
}

#[cfg(test)]
mod boundary {
    use crate::{DEFAULT_CIRCLE_POINTS, EARTH_RADIUS_M, GeoError, GeoPoint, circle_boundary};

    #[test]
    fn returns_requested_point_count() {
        let center = GeoPoint::new(50.4501, 30.5234);
        for n in [3, 4, DEFAULT_CIRCLE_POINTS, 257] {
            let ring = circle_boundary(center, 1_000.0, n).unwrap();
            assert_eq!(ring.len(), n);
        }
    }

    #[test]
    fn every_point_sits_at_the_radius() {
        // Formula fidelity across latitudes and four orders of magnitude
        // of radius: each vertex within 0.1 % of nominal.
        for lat in [-80.0, -45.0, 0.0, 45.0, 80.0] {
            let center = GeoPoint::new(lat, 17.0);
            for radius in [1.0, 100.0, 10_000.0, 50_000.0] {
                let ring = circle_boundary(center, radius, 64).unwrap();
                for p in ring {
                    let d = center.distance_m(p);
                    assert!(
                        (d - radius).abs() <= radius * 1e-3,
                        "lat {lat}, radius {radius}: got {d}"
                    );
                }
            }
        }
    }

    #[test]
    fn starts_due_north_then_clockwise() {
        let center = GeoPoint::new(48.1351, 11.5820);
        let ring = circle_boundary(center, 5_000.0, 64).unwrap();

        assert!(ring[0].lat > center.lat);
        assert!((ring[0].lon - center.lon).abs() < 1e-9);

        let second = center.bearing_to(ring[1]);
        assert!((second - 360.0 / 64.0).abs() < 0.01, "got {second}");
    }

    #[test]
    fn bearings_increase_monotonically() {
        let center = GeoPoint::new(48.1351, 11.5820);
        let n = 64;
        let step = 360.0 / n as f64;
        let ring = circle_boundary(center, 5_000.0, n).unwrap();

        let mut prev = center.bearing_to(ring[0]);
        for p in &ring[1..] {
            let b = center.bearing_to(*p);
            let delta = (b - prev).rem_euclid(360.0);
            assert!(delta > 0.0 && delta < 2.0 * step, "delta {delta}");
            prev = b;
        }
    }

    #[test]
    fn zero_radius_collapses_onto_center() {
        let center = GeoPoint::new(50.4501, 30.5234);
        let ring = circle_boundary(center, 0.0, 8).unwrap();
        assert_eq!(ring.len(), 8);
        for p in ring {
            assert!((p.lat - center.lat).abs() < 1e-9);
            assert!((p.lon - center.lon).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_too_few_points() {
        let center = GeoPoint::new(50.4501, 30.5234);
        for n in [0, 1, 2] {
            let err = circle_boundary(center, 1_000.0, n).unwrap_err();
            assert!(matches!(err, GeoError::InvalidPointCount { got } if got == n));
        }
    }

    #[test]
    fn rejects_bad_radius() {
        let center = GeoPoint::new(50.4501, 30.5234);
        for radius in [-5.0, f64::NAN, f64::INFINITY] {
            let err = circle_boundary(center, radius, 64).unwrap_err();
            assert!(matches!(err, GeoError::InvalidRadius { .. }), "radius {radius}");
        }
    }

    #[test]
    fn antimeridian_ring_has_no_longitude_jump() {
        let radius = 10_000.0;
        let n = 64;
        let ring = circle_boundary(GeoPoint::new(0.0, 179.999), radius, n).unwrap();

        assert!(ring.iter().all(|p| (-180.0..180.0).contains(&p.lon)));
        // The ring genuinely straddles the line.
        assert!(ring.iter().any(|p| p.lon > 0.0));
        assert!(ring.iter().any(|p| p.lon < 0.0));

        // Adjacent vertices stay within twice the mean along-ring
        // spacing, so there is no wrap-around artifact near ±180.
        let radius_deg = (radius / EARTH_RADIUS_M).to_degrees();
        let max_gap = 2.0 * radius_deg * (2.0 * std::f64::consts::PI / n as f64);
        for pair in ring.windows(2) {
            let raw = (pair[1].lon - pair[0].lon).abs();
            let gap = raw.min(360.0 - raw);
            assert!(gap < max_gap, "gap {gap} between {} and {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn high_latitude_ring_widens_in_longitude() {
        let span = |lat: f64| {
            let ring = circle_boundary(GeoPoint::new(lat, 0.0), 10_000.0, 64).unwrap();
            let min = ring.iter().map(|p| p.lon).fold(f64::INFINITY, f64::min);
            let max = ring.iter().map(|p| p.lon).fold(f64::NEG_INFINITY, f64::max);
            max - min
        };

        // 10 km is ~0.18 degrees of longitude at the equator but ~1.03
        // at 80 N; a planar circle in degree space would miss that by a
        // factor of five.
        let equator = span(0.0);
        assert!((0.17..0.19).contains(&equator), "got {equator}");
        let polar = span(80.0);
        assert!((0.95..1.10).contains(&polar), "got {polar}");
    }
}

#[cfg(test)]
mod bounds {
    use crate::{GeoBounds, GeoPoint};

    #[test]
    fn contains_includes_edges() {
        let b = GeoBounds::new(50.5, 50.4, 30.56, 30.47);
        assert!(b.contains(GeoPoint::new(50.45, 30.50)));
        assert!(b.contains(GeoPoint::new(50.5, 30.56)));
        assert!(b.contains(GeoPoint::new(50.4, 30.47)));
        assert!(!b.contains(GeoPoint::new(50.51, 30.50)));
        assert!(!b.contains(GeoPoint::new(50.45, 30.46)));
    }

    #[test]
    fn around_extends_by_the_radius() {
        let center = GeoPoint::new(50.4501, 30.5234);
        let b = GeoBounds::around(center, 2_000.0);

        let north_edge = GeoPoint::new(b.north, center.lon);
        let east_edge = GeoPoint::new(center.lat, b.east);
        assert!((center.distance_m(north_edge) - 2_000.0).abs() < 1.0);
        assert!((center.distance_m(east_edge) - 2_000.0).abs() < 1.0);
        assert!(b.is_valid());
    }

    #[test]
    fn around_preserves_the_center() {
        let center = GeoPoint::new(50.4501, 30.5234);
        let c = GeoBounds::around(center, 2_000.0).center();
        assert!((c.lat - center.lat).abs() < 1e-6);
        assert!((c.lon - center.lon).abs() < 1e-6);
    }

    #[test]
    fn flipped_or_out_of_range_edges_are_invalid() {
        assert!(!GeoBounds::new(50.4, 50.5, 30.56, 30.47).is_valid());
        assert!(!GeoBounds::new(50.5, 50.4, 30.47, 30.56).is_valid());
        assert!(!GeoBounds::new(91.0, 50.4, 30.56, 30.47).is_valid());
        assert!(!GeoBounds::new(50.5, 50.4, 181.0, 30.47).is_valid());
        assert!(GeoBounds::new(50.5, 50.4, 30.56, 30.47).is_valid());
    }

    #[test]
    fn display() {
        let b = GeoBounds::new(50.5, 50.4, 30.56, 30.47);
        assert_eq!(b.to_string(), "lat 50.4000..50.5000, lon 30.4700..30.5600");
    }
}
