use super::*;

fn loc(latitude: f64, longitude: f64) -> Location {
    Location::new(latitude, longitude).expect("valid test location")
}

#[test]
fn test_location_accepts_boundaries() {
    assert!(Location::new(90.0, 180.0).is_ok());
    assert!(Location::new(-90.0, -180.0).is_ok());
    assert!(Location::new(0.0, 0.0).is_ok());
}

#[test]
fn test_location_rejects_out_of_range() {
    assert_eq!(
        Location::new(90.5, 0.0),
        Err(GeoError::InvalidLatitude { value: 90.5 })
    );
    assert_eq!(
        Location::new(0.0, -180.01),
        Err(GeoError::InvalidLongitude { value: -180.01 })
    );
}

#[test]
fn test_location_rejects_non_finite() {
    assert!(matches!(
        Location::new(f64::NAN, 0.0),
        Err(GeoError::InvalidLatitude { .. })
    ));
    assert!(matches!(
        Location::new(0.0, f64::INFINITY),
        Err(GeoError::InvalidLongitude { .. })
    ));
}

#[test]
fn test_location_deserialize_validates() {
    let ok: Location = serde_json::from_str(r#"{"latitude":12.9,"longitude":77.6}"#).unwrap();
    assert_eq!(ok, loc(12.9, 77.6));

    let bad = serde_json::from_str::<Location>(r#"{"latitude":120.0,"longitude":77.6}"#);
    assert!(bad.is_err());
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [
        (loc(12.95, 77.63), loc(12.97, 77.59)),
        (loc(-33.86, 151.21), loc(51.5, -0.12)),
        (loc(0.0, 179.9), loc(0.0, -179.9)),
        (loc(89.9, 10.0), loc(-89.9, -170.0)),
    ];

    for (a, b) in pairs {
        let ab = distance_km(a, b);
        let ba = distance_km(b, a);
        assert!((ab - ba).abs() < 1e-9, "{ab} != {ba} for {a} / {b}");
        assert!(ab >= 0.0);
    }
}

#[test]
fn test_distance_to_self_is_zero() {
    for a in [loc(12.95, 77.63), loc(-90.0, 0.0), loc(45.0, -180.0)] {
        assert!(distance_km(a, a).abs() < 1e-9);
    }
}

#[test]
fn test_distance_known_values() {
    // One degree of latitude on a 6371 km sphere.
    let one_degree = distance_km(loc(0.0, 0.0), loc(1.0, 0.0));
    assert!((one_degree - 111.195).abs() < 0.01, "got {one_degree}");

    // Bengaluru to Chennai, roughly 290 km.
    let blr_maa = distance_km(loc(12.9716, 77.5946), loc(13.0827, 80.2707));
    assert!((blr_maa - 290.0).abs() < 5.0, "got {blr_maa}");
}

#[test]
fn test_distance_antipodal_is_half_circumference() {
    let d = distance_km(loc(0.0, 0.0), loc(0.0, 180.0));
    let half = std::f64::consts::PI * EARTH_RADIUS_KM;
    assert!((d - half).abs() < 1e-6);
}

#[test]
fn test_geohash_known_vector() {
    let hash = geohash(loc(57.64911, 10.40744), 11).unwrap();
    assert_eq!(hash, "u4pruydqqvj");

    let hash = geohash(loc(57.64911, 10.40744), 7).unwrap();
    assert_eq!(hash, "u4pruyd");
}

#[test]
fn test_geohash_is_deterministic() {
    let a = loc(12.9501, 77.6312);
    assert_eq!(geohash(a, 7).unwrap(), geohash(a, 7).unwrap());
}

#[test]
fn test_geohash_nearby_points_share_cell() {
    let a = geohash(loc(12.95000, 77.63000), 7).unwrap();
    let b = geohash(loc(12.95001, 77.63001), 7).unwrap();
    assert_eq!(a, b);

    let far = geohash(loc(12.99, 77.70), 7).unwrap();
    assert_ne!(a, far);
}

#[test]
fn test_geohash_length_matches_precision() {
    let a = loc(-45.0, 120.0);
    for precision in 1..=MAX_GEOHASH_PRECISION {
        assert_eq!(geohash(a, precision).unwrap().len(), precision);
    }
}

#[test]
fn test_geohash_rejects_bad_precision() {
    let a = loc(0.0, 0.0);
    assert!(matches!(
        geohash(a, 0),
        Err(GeoError::InvalidPrecision { precision: 0, .. })
    ));
    assert!(matches!(
        geohash(a, MAX_GEOHASH_PRECISION + 1),
        Err(GeoError::InvalidPrecision { .. })
    ));
}

#[test]
fn test_geohash_accepts_extreme_coordinates() {
    assert_eq!(geohash(loc(-90.0, -180.0), 7).unwrap(), "0000000");
    assert_eq!(geohash(loc(90.0, 180.0), 7).unwrap().len(), 7);
}
