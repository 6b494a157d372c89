//! # globeshape Editor
//!
//! Interactive editing of surface shapes on a globe: control point
//! synthesis, the reshape rules for each shape type, the pointer gesture
//! state machine and the editor session that ties them to a scene view and
//! a render sink.

pub mod annotation;
pub mod control_points;
pub mod editor;
pub mod error;
pub mod gesture;
pub mod model;
pub mod render;
pub mod reshape;
pub mod view;

pub use control_points::{
    ControlPoint, ControlPointKey, ControlPointLayout, ControlPointPurpose, ControlPointSet,
    SyncOutcome,
};
pub use editor::{ShapeEditor, ShapeEditorBuilder};
pub use error::{EditorError, EditorResult};
pub use gesture::{
    transition, ClickGesture, DragSession, DragTarget, Gesture, GestureInput, GestureState,
    Modifiers, PointerEvent, PointerEventKind,
};
pub use model::{
    EditableGeometry, EditableShape, GeoCircle, GeoEllipse, GeoPolygon, GeoPolyline,
    GeoRectangle, Shape, ShapeAttributes, ShapeType, MIN_POLYGON_VERTICES, MIN_POLYLINE_VERTICES,
};
pub use render::{Layer, LayerState, RenderSink, Renderable, SceneLayers};
pub use reshape::{Rejection, ReshapeContext, ReshapeEngine, ReshapeOutcome};
pub use view::{LookAtView, PickCandidate, PickedObject, SceneView, ScreenPoint};
