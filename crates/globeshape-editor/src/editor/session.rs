use globeshape_core::{Globe, Position};

use super::accessories::{annotation, marker, orientation_line};
use super::ShapeEditor;
use crate::control_points::{ControlPointPurpose, SyncOutcome};
use crate::gesture::GestureState;
use crate::model::{EditableGeometry, EditableShape};
use crate::render::{Layer, RenderSink};
use crate::view::{PickCandidate, SceneView};

impl<G: Globe, V: SceneView, S: RenderSink> ShapeEditor<G, V, S> {
    /// Arm or disarm the editor.
    ///
    /// Arming attaches the editor's layers and shows control points for the
    /// current shape. Disarming removes everything the editor drew and hands
    /// the shape back.
    pub fn set_armed(&mut self, armed: bool) -> Option<EditableShape> {
        if armed {
            if !self.armed {
                self.arm();
            }
            return None;
        }

        if self.armed {
            self.disarm();
        }
        self.target.take()
    }

    fn arm(&mut self) {
        for layer in Layer::ALL {
            self.sink.attach_layer(layer);
        }
        self.sink.add_renderable(
            Layer::Accessory,
            orientation_line(&self.config.orientation_line, Vec::new()),
        );
        self.sink.add_renderable(
            Layer::Annotation,
            annotation(&self.config.annotation, Position::default(), String::new()),
        );
        self.sink.set_layer_enabled(Layer::Annotation, false);

        self.armed = true;
        self.sync_control_points();
        self.sink.redraw();
        tracing::info!("Shape editor armed");
    }

    fn disarm(&mut self) {
        if self.gesture.is_dragging() {
            self.remove_shadow();
        }
        for layer in Layer::ALL {
            self.sink.remove_all_renderables(layer);
            self.sink.detach_layer(layer);
        }

        self.engine.end();
        self.engine.reset_heading();
        self.control_points.clear();
        self.gesture = GestureState::Idle;
        self.armed = false;
        self.view.update_pick_candidates(&[]);
        self.sink.redraw();
        tracing::info!("Shape editor disarmed");
    }

    /// Replace the shape being edited; control points are rebuilt from scratch.
    ///
    /// Returns the previous shape.
    pub fn set_shape(&mut self, shape: EditableShape) -> Option<EditableShape> {
        if self.gesture.is_dragging() {
            self.remove_shadow();
            self.update_annotation(None);
            self.gesture = GestureState::Idle;
        }
        self.engine.end();
        self.engine.reset_heading();

        let previous = self.target.replace(shape);
        self.control_points.clear();
        if self.armed {
            self.sink.remove_all_renderables(Layer::ControlPoints);
            self.sync_control_points();
            self.sink.redraw();
        }
        previous
    }

    /// Bring control points, markers and the orientation line in line with the shape.
    pub(super) fn sync_control_points(&mut self) {
        if !self.armed {
            return;
        }
        let Some(target) = self.target.as_ref() else {
            return;
        };

        let layout = target
            .shape
            .control_points(&self.globe, self.engine.current_heading());

        match self.control_points.sync(layout.points) {
            SyncOutcome::Rebuilt => {
                self.sink.remove_all_renderables(Layer::ControlPoints);
                for control_point in self.control_points.iter() {
                    let renderable = marker(&self.config.markers, control_point);
                    self.sink.add_renderable(Layer::ControlPoints, renderable);
                }
                tracing::debug!("Rebuilt {} control points", self.control_points.len());
            }
            SyncOutcome::Repositioned => {
                for (index, control_point) in self.control_points.iter().enumerate() {
                    self.sink.replace_renderable(
                        Layer::ControlPoints,
                        index,
                        marker(&self.config.markers, control_point),
                    );
                }
            }
        }

        let positions = layout
            .orientation_line
            .map(|(center, handle)| vec![center, handle])
            .unwrap_or_default();
        self.sink.replace_renderable(
            Layer::Accessory,
            0,
            orientation_line(&self.config.orientation_line, positions),
        );

        let candidates = self.pick_candidates();
        self.view.update_pick_candidates(&candidates);
    }

    /// What a view should be able to pick: every draggable control point and the shape.
    pub fn pick_candidates(&self) -> Vec<PickCandidate> {
        let mut candidates: Vec<PickCandidate> = self
            .control_points
            .iter()
            .filter(|cp| cp.purpose != ControlPointPurpose::Annotation)
            .map(|cp| PickCandidate::ControlPoint {
                key: cp.key(),
                position: cp.position,
            })
            .collect();

        if let Some(target) = &self.target {
            candidates.push(PickCandidate::Shape {
                id: target.id,
                shape: target.shape.clone(),
            });
        }
        candidates
    }
}
