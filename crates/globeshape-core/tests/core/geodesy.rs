use globeshape_core::{
    great_circle_azimuth, great_circle_distance, great_circle_location, rotate_locations,
    Location, Position,
};

#[test]
fn test_location_roundtrips_azimuth_and_distance() {
    let origin = Location::new(40.0, -100.0);
    let target = great_circle_location(&origin, 37.0, 0.05);

    let azimuth = great_circle_azimuth(&origin, &target);
    let distance = great_circle_distance(&origin, &target);

    assert!((azimuth - 37.0).abs() < 1e-6, "azimuth should be 37, got {}", azimuth);
    assert!((distance - 0.05).abs() < 1e-9, "distance should be 0.05, got {}", distance);
}

#[test]
fn test_rotation_preserves_distance_from_center() {
    let center = Location::new(42.0, -110.0);
    let mut positions = vec![
        Position::surface(40.0, -100.0),
        Position::surface(45.0, -110.0),
        Position::surface(40.0, -120.0),
    ];
    let before: Vec<f64> = positions
        .iter()
        .map(|p| great_circle_distance(&center, &p.location()))
        .collect();

    rotate_locations(&center, 30.0, &mut positions);

    for (p, d) in positions.iter().zip(before) {
        let after = great_circle_distance(&center, &p.location());
        assert!((after - d).abs() < 1e-9);
        assert_eq!(p.altitude, 0.0);
    }
}

#[test]
fn test_rotation_changes_azimuth_by_delta() {
    let center = Location::new(0.0, 0.0);
    let mut positions = vec![Position::surface(0.0, 5.0)];

    rotate_locations(&center, -45.0, &mut positions);

    let azimuth = great_circle_azimuth(&center, &positions[0].location());
    assert!((azimuth - 45.0).abs() < 1e-6, "azimuth should be 45, got {}", azimuth);
}
