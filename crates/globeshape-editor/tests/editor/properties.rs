use globeshape_core::{
    great_circle_location, nearest_point_on_segment, Ellipsoid, Globe, Location, Position,
};
use globeshape_editor::{
    EditableGeometry, GeoCircle, GeoPolygon, GeoRectangle, ReshapeEngine, ReshapeOutcome, Shape,
    MIN_POLYGON_VERTICES,
};
use proptest::prelude::*;

use crate::support::along_axis;

/// Star-shaped ring with one vertex per radius, evenly spread in azimuth.
fn star(center: &Location, radii: &[f64]) -> Vec<Position> {
    let step = 360.0 / radii.len() as f64;
    radii
        .iter()
        .enumerate()
        .map(|(i, radius)| great_circle_location(center, i as f64 * step, *radius).into())
        .collect()
}

/// Index a new vertex should take when inserted near `pick`.
fn expected_insert_index(globe: &Ellipsoid, ring: &[Position], pick: &Position) -> usize {
    let pick_point = globe.location_to_point(&pick.location());
    let points: Vec<_> = ring
        .iter()
        .map(|p| globe.location_to_point(&p.location()))
        .collect();

    let mut best = (f64::INFINITY, 0);
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        let nearest = nearest_point_on_segment(&points[i], &points[j], &pick_point);
        let distance = (nearest - pick_point).norm();
        if distance < best.0 {
            best = (distance, if j == 0 { points.len() } else { i + 1 });
        }
    }
    best.1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn deletion_never_drops_below_minimum(
        radii in prop::collection::vec(0.01f64..0.05, 3..9),
        deletions in prop::collection::vec(0usize..10, 0..12),
    ) {
        let mut shape = Shape::Polygon(GeoPolygon::new(star(&Location::new(10.0, 20.0), &radii)));

        for id in deletions {
            let before = shape.vertex_count();
            let outcome = shape.delete_vertex(id);
            let after = shape.vertex_count();

            prop_assert!(after >= MIN_POLYGON_VERTICES);
            if outcome.is_applied() {
                prop_assert!(id < before && before > MIN_POLYGON_VERTICES);
                prop_assert_eq!(after, before - 1);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn insertion_splits_the_nearest_edge(
        radii in prop::collection::vec(0.01f64..0.05, 3..8),
        pick_azimuth in 0.0f64..360.0,
        pick_distance in 0.0f64..0.02,
    ) {
        let globe = Ellipsoid::wgs84();
        let center = Location::new(-30.0, 140.0);
        let ring = star(&center, &radii);
        let pick = Position::from(great_circle_location(&center, pick_azimuth, pick_distance));

        let expected = expected_insert_index(&globe, &ring, &pick);
        let mut shape = Shape::Polygon(GeoPolygon::new(ring.clone()));
        let index = shape.insert_vertex_near(&globe, &pick).unwrap();

        prop_assert_eq!(index, Some(expected));
        prop_assert_eq!(shape.vertex_count(), ring.len() + 1);
        let Shape::Polygon(polygon) = &shape else { unreachable!() };
        prop_assert_eq!(polygon.rings[0][expected].altitude, 0.0);
    }

    #[test]
    fn circle_radius_stays_positive(
        radius in 10.0f64..100_000.0,
        drags in prop::collection::vec(-200_000.0f64..200_000.0, 1..6),
    ) {
        let globe = Ellipsoid::wgs84();
        let center = Location::new(45.0, 7.0);
        let mut shape = Shape::Circle(GeoCircle::new(center, radius));
        let mut engine = ReshapeEngine::new();

        for meters in drags {
            let cp = shape.control_points(&globe, 0.0).points[0].clone();
            engine.begin(Some(cp.position));
            let before = shape.clone();
            let terrain = along_axis(&globe, &center, &cp, meters);
            let outcome = engine.reshape(&globe, &mut shape, &cp, terrain).unwrap();

            let Shape::Circle(circle) = &shape else { unreachable!() };
            prop_assert!(circle.radius > 0.0);
            if let ReshapeOutcome::Rejected(_) = outcome {
                prop_assert_eq!(&shape, &before);
            }
        }
    }

    #[test]
    fn rectangle_sizes_stay_positive(
        width in 100.0f64..50_000.0,
        height in 100.0f64..50_000.0,
        heading in 0.0f64..360.0,
        handle in 0usize..2,
        meters in -60_000.0f64..60_000.0,
    ) {
        let globe = Ellipsoid::wgs84();
        let center = Location::new(-12.0, -60.0);
        let mut shape = Shape::Rectangle(
            GeoRectangle::new(center, width, height).with_heading(heading),
        );
        let cp = shape.control_points(&globe, 0.0).points[handle].clone();

        let mut engine = ReshapeEngine::new();
        engine.begin(Some(cp.position));
        let terrain = along_axis(&globe, &center, &cp, meters);
        engine.reshape(&globe, &mut shape, &cp, terrain).unwrap();

        let Shape::Rectangle(rect) = &shape else { unreachable!() };
        prop_assert!(rect.width > 0.0 && rect.height > 0.0);
    }
}
