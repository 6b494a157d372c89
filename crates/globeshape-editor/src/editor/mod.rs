//! Shape editor session.
//! Routes pointer gestures to control point synchronisation and reshaping.
//!
//! This module is split into submodules:
//! - `builder`: construction and collaborator checks
//! - `session`: arming, shape replacement, control point synchronisation
//! - `drag`: pointer-down/move/up handling and click gestures
//! - `accessories`: markers, shadow and annotation renderables

mod accessories;
mod builder;
mod drag;
mod session;

use globeshape_core::Globe;
use globeshape_settings::EditorConfig;

use crate::control_points::ControlPointSet;
use crate::gesture::{transition, GestureInput, GestureState, PointerEvent, PointerEventKind};
use crate::model::{EditableShape, ShapeAttributes};
use crate::render::RenderSink;
use crate::reshape::ReshapeEngine;
use crate::view::SceneView;

pub use builder::ShapeEditorBuilder;

/// Interactive editor for one shape at a time.
pub struct ShapeEditor<G: Globe, V: SceneView, S: RenderSink> {
    globe: G,
    view: V,
    sink: S,
    config: EditorConfig,
    armed: bool,
    target: Option<EditableShape>,
    control_points: ControlPointSet,
    engine: ReshapeEngine,
    gesture: GestureState,
    /// Highlight attributes of the target before the current drag
    saved_highlight: Option<ShapeAttributes>,
}

impl<G: Globe, V: SceneView, S: RenderSink> ShapeEditor<G, V, S> {
    pub fn builder() -> ShapeEditorBuilder<G, V, S> {
        ShapeEditorBuilder::new()
    }

    pub fn globe(&self) -> &G {
        &self.globe
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn gesture_state(&self) -> &GestureState {
        &self.gesture
    }

    /// The shape being edited.
    pub fn shape(&self) -> Option<&EditableShape> {
        self.target.as_ref()
    }

    pub fn control_points(&self) -> &ControlPointSet {
        &self.control_points
    }

    /// Heading accumulated by rotating a polygon or polyline.
    pub fn heading(&self) -> f64 {
        self.engine.current_heading()
    }

    /// Entry point for pointer events from the host.
    ///
    /// Events are ignored while disarmed or with nothing to edit. Failures are
    /// logged, never returned.
    pub fn on_gesture_event(&mut self, event: &PointerEvent) {
        if !self.armed || self.target.is_none() {
            return;
        }

        let at = event.at();
        let input = match event.kind {
            PointerEventKind::Down => GestureInput::Down {
                at,
                modifiers: event.modifiers(),
                hit: self.pick_drag_target(at),
            },
            PointerEventKind::Move => GestureInput::Move { at },
            PointerEventKind::Up => GestureInput::Up {
                at,
                modifiers: event.modifiers(),
            },
            PointerEventKind::Unknown => {
                tracing::info!("Unrecognized pointer event: {:?}", event);
                return;
            }
        };

        let (state, gesture) =
            transition(std::mem::take(&mut self.gesture), input, &self.config.gestures);
        self.gesture = state;

        if let Err(err) = self.apply_gesture(gesture, at) {
            tracing::error!("Error handling {:?} event: {}", event.kind, err);
        }
    }
}
