//! Shared fixtures for the editor integration tests.

use globeshape_core::{Ellipsoid, Globe, Location, Position};
use globeshape_editor::{
    ControlPoint, EditableShape, LookAtView, SceneLayers, SceneView, ScreenPoint, Shape,
    ShapeEditor,
};

pub type TestEditor = ShapeEditor<Ellipsoid, LookAtView<Ellipsoid>, SceneLayers>;

pub const LOOK_AT: Location = Location {
    latitude: 40.0,
    longitude: -100.0,
};

/// 800x600 viewport, 50 km above the look-at location.
pub fn view() -> LookAtView<Ellipsoid> {
    LookAtView::new(Ellipsoid::wgs84(), LOOK_AT, 50_000.0, 800.0, 600.0, 45.0).unwrap()
}

/// Armed editor holding `shape` with id 1.
pub fn armed_editor(shape: Shape) -> TestEditor {
    let mut editor = ShapeEditor::builder()
        .globe(Ellipsoid::wgs84())
        .view(view())
        .sink(SceneLayers::new())
        .build()
        .unwrap();
    editor.set_shape(EditableShape::new(1, shape));
    editor.set_armed(true);
    editor
}

/// Square of `half_size` degrees around the look-at location.
pub fn square_around_look_at(half_size: f64) -> Vec<Position> {
    let (lat, lon) = (LOOK_AT.latitude, LOOK_AT.longitude);
    vec![
        Position::surface(lat - half_size, lon - half_size),
        Position::surface(lat + half_size, lon - half_size),
        Position::surface(lat + half_size, lon + half_size),
        Position::surface(lat - half_size, lon + half_size),
    ]
}

/// Where `control_point` shows up on screen.
pub fn screen_of(editor: &TestEditor, control_point: &ControlPoint) -> ScreenPoint {
    editor
        .view()
        .project(&editor.globe().position_to_point(&control_point.position))
        .unwrap()
}

/// Position `meters` beyond `control_point`, along the line from `center` through it.
pub fn along_axis<G: Globe>(
    globe: &G,
    center: &Location,
    control_point: &ControlPoint,
    meters: f64,
) -> Position {
    let marker = globe.position_to_point(&control_point.position);
    let axis = (marker - globe.location_to_point(center)).normalize();
    globe.point_to_position(&(marker + axis * meters)).unwrap()
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
