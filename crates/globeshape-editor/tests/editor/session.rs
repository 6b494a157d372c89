use globeshape_core::{format_length, Ellipsoid, Position};
use globeshape_editor::{
    ControlPointKey, ControlPointPurpose, DragTarget, EditableShape, EditorError, GeoCircle,
    GeoPolygon, GeoRectangle, Layer, LookAtView, PickCandidate, PickedObject, PointerEvent,
    PointerEventKind, Renderable, SceneLayers, SceneView, ScreenPoint, Shape, ShapeEditor,
};
use globeshape_settings::EditorConfig;

use crate::support::{
    armed_editor, assert_close, screen_of, square_around_look_at, view, TestEditor, LOOK_AT,
};

fn radius(editor: &TestEditor) -> f64 {
    match &editor.shape().unwrap().shape {
        Shape::Circle(circle) => circle.radius,
        other => panic!("expected a circle, got {other:?}"),
    }
}

fn annotation_text(editor: &TestEditor) -> Option<String> {
    if !editor.sink().is_enabled(Layer::Annotation) {
        return None;
    }
    match editor.sink().renderables(Layer::Annotation).first() {
        Some(Renderable::Annotation { text, .. }) => Some(text.clone()),
        _ => None,
    }
}

fn click(editor: &mut TestEditor, event: PointerEvent) {
    editor.on_gesture_event(&event);
    let up = PointerEvent {
        kind: PointerEventKind::Up,
        ..event
    };
    editor.on_gesture_event(&up);
}

fn key(purpose: ControlPointPurpose, id: usize) -> ControlPointKey {
    ControlPointKey::new(purpose, id)
}

#[test]
fn builder_requires_collaborators() {
    let result = ShapeEditor::<Ellipsoid, LookAtView<Ellipsoid>, SceneLayers>::builder()
        .globe(Ellipsoid::wgs84())
        .sink(SceneLayers::new())
        .build();
    assert!(matches!(result, Err(EditorError::MissingCollaborator("scene view"))));

    let result = ShapeEditor::<Ellipsoid, LookAtView<Ellipsoid>, SceneLayers>::builder()
        .view(view())
        .sink(SceneLayers::new())
        .build();
    match result {
        Err(err) => assert_eq!(err.to_string(), "Shape editor requires a globe"),
        Ok(_) => panic!("editor built without a globe"),
    }
}

#[test]
fn builder_rejects_invalid_config() {
    let mut config = EditorConfig::default();
    config.shadow.interior_alpha = 1.5;

    let result = ShapeEditor::builder()
        .globe(Ellipsoid::wgs84())
        .view(view())
        .sink(SceneLayers::new())
        .config(config)
        .build();
    assert!(matches!(result, Err(EditorError::Settings(_))));
}

#[test]
fn arming_attaches_layers_and_markers() {
    let editor = armed_editor(Shape::Circle(GeoCircle::new(LOOK_AT, 5000.0)));
    let sink = editor.sink();

    for layer in Layer::ALL {
        assert!(sink.is_attached(layer), "{layer:?} not attached");
    }
    assert_eq!(sink.renderables(Layer::ControlPoints).len(), 1);
    assert_eq!(sink.renderables(Layer::Accessory).len(), 1);
    assert!(sink.renderables(Layer::Shadow).is_empty());
    assert!(!sink.is_enabled(Layer::Annotation));

    // Circles have no rotation handle, so the orientation line stays empty.
    assert!(matches!(
        &sink.renderables(Layer::Accessory)[0],
        Renderable::OrientationLine { positions, .. } if positions.is_empty()
    ));
    assert_eq!(editor.view().candidates().len(), 2);
}

#[test]
fn disarming_cleans_up_and_returns_the_shape() {
    let mut editor = armed_editor(Shape::Circle(GeoCircle::new(LOOK_AT, 5000.0)));

    let shape = editor.set_armed(false).unwrap();
    assert_eq!(shape.id, 1);
    assert!(!editor.is_armed());
    assert!(editor.shape().is_none());
    assert!(editor.control_points().is_empty());
    assert!(editor.view().candidates().is_empty());
    for layer in Layer::ALL {
        assert!(editor.sink().layer(layer).is_none());
    }
}

#[test]
fn events_are_ignored_while_disarmed() {
    let mut editor = armed_editor(Shape::Circle(GeoCircle::new(LOOK_AT, 5000.0)));
    let shape = editor.set_armed(false).unwrap();
    editor.set_shape(shape);

    editor.on_gesture_event(&PointerEvent::down(400.0, 300.0));
    assert!(!editor.is_dragging());
}

#[test]
fn unknown_events_are_dropped() {
    let mut editor = armed_editor(Shape::Circle(GeoCircle::new(LOOK_AT, 5000.0)));
    let redraws = editor.sink().redraw_count();

    let event: PointerEvent =
        serde_json::from_str(r#"{"type": "wheel", "clientX": 400, "clientY": 300}"#).unwrap();
    assert_eq!(event.kind, PointerEventKind::Unknown);
    editor.on_gesture_event(&event);

    assert!(!editor.is_dragging());
    assert_eq!(editor.sink().redraw_count(), redraws);
}

#[test]
fn dragging_the_radius_handle() {
    let mut editor = armed_editor(Shape::Circle(GeoCircle::new(LOOK_AT, 5000.0)));
    let handle = editor.control_points().get(0).unwrap().clone();
    let at = screen_of(&editor, &handle);

    editor.on_gesture_event(&PointerEvent::down(at.x, at.y));
    assert_eq!(
        editor.gesture_state().target(),
        Some(DragTarget::ControlPoint(handle.key()))
    );
    assert_eq!(editor.sink().renderables(Layer::Shadow).len(), 1);
    let highlight = &editor.shape().unwrap().highlight_attributes;
    assert_eq!(highlight.interior_color.alpha, 0.7);

    editor.on_gesture_event(&PointerEvent::moved(at.x + 10.0, at.y));
    let grown = radius(&editor);
    assert!(grown > 5500.0 && grown < 5900.0, "radius {grown}");
    assert_eq!(annotation_text(&editor), Some(format_length(grown)));
    assert_eq!(editor.control_points().get(0).unwrap().size, Some(grown));
    assert_eq!(editor.sink().renderables(Layer::ControlPoints).len(), 1);

    editor.on_gesture_event(&PointerEvent::up(at.x + 10.0, at.y));
    assert!(!editor.is_dragging());
    assert!(editor.sink().renderables(Layer::Shadow).is_empty());
    assert_eq!(editor.shape().unwrap().highlight_attributes.interior_color.alpha, 1.0);
    assert_eq!(annotation_text(&editor), None);
    assert_eq!(radius(&editor), grown);
}

#[test]
fn control_point_wins_over_body() {
    let mut editor = armed_editor(Shape::Circle(GeoCircle::new(LOOK_AT, 5000.0)));
    let handle = editor.control_points().get(0).unwrap().clone();
    let on_handle = screen_of(&editor, &handle);
    let inside = ScreenPoint::new(on_handle.x - 3.0, on_handle.y);

    let picked = editor.view().pick(inside);
    assert!(picked.contains(&PickedObject::Shape(1)));
    assert_eq!(picked[0], PickedObject::ControlPoint(handle.key()));

    editor.on_gesture_event(&PointerEvent::down(inside.x, inside.y));
    assert_eq!(
        editor.gesture_state().target(),
        Some(DragTarget::ControlPoint(key(ControlPointPurpose::Width, 0)))
    );
}

#[test]
fn dragging_the_body_moves_the_center() {
    let rect = GeoRectangle::new(LOOK_AT, 20_000.0, 10_000.0);
    let mut editor = armed_editor(Shape::Rectangle(rect));

    editor.on_gesture_event(&PointerEvent::down(400.0, 300.0));
    assert_eq!(editor.gesture_state().target(), Some(DragTarget::Body));

    editor.on_gesture_event(&PointerEvent::moved(430.0, 320.0));
    let expected = editor
        .view()
        .pick_terrain(ScreenPoint::new(430.0, 320.0))
        .unwrap()
        .location();
    let Shape::Rectangle(moved) = &editor.shape().unwrap().shape else {
        unreachable!()
    };
    assert_close(moved.center.latitude, expected.latitude, 1e-9);
    assert_close(moved.center.longitude, expected.longitude, 1e-9);
    assert_eq!(moved.width, 20_000.0);

    // Centered shapes label their center while moving.
    let text = annotation_text(&editor).unwrap();
    assert!(text.contains("°N") && text.contains("°W"), "{text}");

    // Handles follow the shape.
    let width = editor.control_points().get(0).unwrap();
    assert!(width.position.longitude > LOOK_AT.longitude);
    assert!(width.position.latitude < LOOK_AT.latitude);

    editor.on_gesture_event(&PointerEvent::up(430.0, 320.0));
    assert_eq!(annotation_text(&editor), None);
}

#[test]
fn new_pointer_down_interrupts_a_drag() {
    let mut editor = armed_editor(Shape::Circle(GeoCircle::new(LOOK_AT, 5000.0)));

    editor.on_gesture_event(&PointerEvent::down(400.0, 300.0));
    editor.on_gesture_event(&PointerEvent::down(405.0, 300.0));
    assert!(editor.is_dragging());
    assert_eq!(editor.sink().renderables(Layer::Shadow).len(), 1);

    // Pointer-down on empty terrain ends the drag.
    editor.on_gesture_event(&PointerEvent::down(20.0, 20.0));
    assert!(!editor.is_dragging());
    assert!(editor.sink().renderables(Layer::Shadow).is_empty());
}

#[test]
fn shift_click_inserts_a_vertex() {
    let mut editor = armed_editor(Shape::Polygon(GeoPolygon::new(square_around_look_at(0.05))));
    assert_eq!(editor.control_points().len(), 5);

    let near_east_edge = editor
        .view()
        .project_position(&Position::surface(40.0, -99.955))
        .unwrap();

    click(&mut editor, PointerEvent::down(near_east_edge.x, near_east_edge.y));
    assert_eq!(editor.shape().unwrap().shape.vertex_count(), 4);

    click(
        &mut editor,
        PointerEvent::down(near_east_edge.x, near_east_edge.y).with_shift(),
    );
    let Shape::Polygon(polygon) = &editor.shape().unwrap().shape else {
        unreachable!()
    };
    assert_eq!(polygon.rings[0].len(), 5);
    assert_close(polygon.rings[0][3].longitude, -99.95, 1e-3);
    assert_eq!(editor.control_points().len(), 6);
    assert_eq!(editor.sink().renderables(Layer::ControlPoints).len(), 6);
}

#[test]
fn alt_click_deletes_a_vertex_down_to_the_minimum() {
    let mut editor = armed_editor(Shape::Polygon(GeoPolygon::new(square_around_look_at(0.05))));

    let vertex = editor.control_points().get(0).unwrap().clone();
    let at = screen_of(&editor, &vertex);
    click(&mut editor, PointerEvent::down(at.x, at.y));
    assert_eq!(editor.shape().unwrap().shape.vertex_count(), 4);

    click(&mut editor, PointerEvent::down(at.x, at.y).with_alt());
    assert_eq!(editor.shape().unwrap().shape.vertex_count(), 3);
    assert_eq!(editor.control_points().len(), 4);

    let vertex = editor.control_points().get(0).unwrap().clone();
    let at = screen_of(&editor, &vertex);
    click(&mut editor, PointerEvent::down(at.x, at.y).with_alt());
    assert_eq!(editor.shape().unwrap().shape.vertex_count(), 3);
}

#[test]
fn replacing_the_shape_rebuilds_markers() {
    let mut editor = armed_editor(Shape::Circle(GeoCircle::new(LOOK_AT, 5000.0)));

    let previous = editor.set_shape(EditableShape::new(
        2,
        Shape::Polygon(GeoPolygon::new(square_around_look_at(0.05))),
    ));
    assert_eq!(previous.map(|shape| shape.id), Some(1));
    assert_eq!(editor.sink().renderables(Layer::ControlPoints).len(), 5);
    assert!(matches!(
        &editor.sink().renderables(Layer::Accessory)[0],
        Renderable::OrientationLine { positions, .. } if positions.len() == 2
    ));
    assert_eq!(editor.heading(), 0.0);
    assert!(editor
        .view()
        .candidates()
        .iter()
        .any(|candidate| matches!(candidate, PickCandidate::Shape { id: 2, .. })));
}
