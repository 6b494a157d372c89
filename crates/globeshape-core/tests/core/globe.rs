use globeshape_core::{
    average_distance, centroid, compute_control_point_delta, Ellipsoid, GeoError, Globe,
    Location, Position, Ray, Vec3,
};

#[test]
fn test_position_point_roundtrip() {
    let globe = Ellipsoid::wgs84();
    for &(lat, lon, alt) in &[
        (0.0, 0.0, 0.0),
        (40.0, -100.0, 0.0),
        (-33.5, 151.2, 1200.0),
        (89.9, 45.0, -50.0),
        (12.0, 179.9, 10.0),
    ] {
        let position = Position::new(lat, lon, alt);
        let point = globe.position_to_point(&position);
        let back = globe.point_to_position(&point).unwrap();
        assert!((back.latitude - lat).abs() < 1e-9, "lat {} -> {}", lat, back.latitude);
        assert!((back.longitude - lon).abs() < 1e-9, "lon {} -> {}", lon, back.longitude);
        assert!((back.altitude - alt).abs() < 1e-5, "alt {} -> {}", alt, back.altitude);
    }
}

#[test]
fn test_ray_from_space_hits_near_side() {
    let globe = Ellipsoid::wgs84();
    let above = globe.position_to_point(&Position::new(40.0, -100.0, 100_000.0));
    let surface = globe.location_to_point(&Location::new(40.0, -100.0));
    let ray = Ray::new(above, surface - above);

    let hit = globe.intersect_ray(&ray).expect("ray should hit the globe");
    let position = globe.point_to_position(&hit).unwrap();

    assert!((position.latitude - 40.0).abs() < 1e-6);
    assert!((position.longitude + 100.0).abs() < 1e-6);
    assert!(position.altitude.abs() < 1e-3);
}

#[test]
fn test_ray_pointing_away_misses() {
    let globe = Ellipsoid::wgs84();
    let ray = Ray::new(Vec3::new(0.0, 0.0, 7_000_000.0), Vec3::new(0.0, 0.0, 1.0));
    assert!(globe.intersect_ray(&ray).is_none());

    let ray = Ray::new(Vec3::new(0.0, 0.0, 7_000_000.0), Vec3::new(1.0, 0.0, 0.0));
    assert!(globe.intersect_ray(&ray).is_none());
}

#[test]
fn test_control_point_delta_includes_altitude() {
    let globe = Ellipsoid::sphere(1000.0);
    let delta = compute_control_point_delta(
        &globe,
        &Position::new(0.0, 0.0, 0.0),
        &Position::new(0.0, 0.0, 10.0),
    );
    assert!((delta - Vec3::new(0.0, 0.0, 10.0)).norm() < 1e-9);
}

#[test]
fn test_centroid_of_symmetric_points() {
    let globe = Ellipsoid::wgs84();
    let positions = vec![
        Position::surface(0.0, -1.0),
        Position::surface(0.0, 1.0),
        Position::surface(1.0, 0.0),
        Position::surface(-1.0, 0.0),
    ];
    let center = centroid(&globe, &positions).expect("non-empty centroid");

    assert!(center.latitude.abs() < 1e-9);
    assert!(center.longitude.abs() < 1e-9);
}

#[test]
fn test_centroid_of_nothing_is_empty_geometry() {
    let globe = Ellipsoid::wgs84();
    let err = centroid(&globe, &[]).unwrap_err();
    assert!(matches!(err, GeoError::EmptyGeometry { .. }));
    assert_eq!(err.to_string(), "Geometry has no locations: centroid");
}

#[test]
fn test_average_distance_on_sphere() {
    let globe = Ellipsoid::sphere(1.0);
    let positions = vec![Position::surface(0.0, 90.0), Position::surface(0.0, -90.0)];
    let d = average_distance(&globe, &Location::new(0.0, 0.0), &positions);
    assert!((d - 2f64.sqrt()).abs() < 1e-12, "expected sqrt(2), got {}", d);
}
