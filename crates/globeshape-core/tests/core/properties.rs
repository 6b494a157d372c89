use globeshape_core::{
    great_circle_distance, normalized_heading, rotate_locations, Location, Position,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn heading_is_always_in_range(base in -1.0e6f64..1.0e6, delta in -1.0e6f64..1.0e6) {
        let heading = normalized_heading(base, delta);
        prop_assert!((0.0..360.0).contains(&heading), "heading {} out of range", heading);
    }

    #[test]
    fn rotation_is_reversible(
        center_lat in -60.0f64..60.0,
        center_lon in -170.0f64..170.0,
        offsets in prop::collection::vec((-2.0f64..2.0, -2.0f64..2.0), 1..8),
        delta in -180.0f64..180.0,
    ) {
        let center = Location::new(center_lat, center_lon);
        let original: Vec<Position> = offsets
            .iter()
            .map(|(dlat, dlon)| Position::surface(center_lat + dlat, center_lon + dlon))
            .collect();

        let mut positions = original.clone();
        rotate_locations(&center, delta, &mut positions);
        rotate_locations(&center, -delta, &mut positions);

        for (a, b) in original.iter().zip(&positions) {
            let error = great_circle_distance(&a.location(), &b.location());
            prop_assert!(error < 1e-9, "rotation drifted by {} rad", error);
        }
    }
}
