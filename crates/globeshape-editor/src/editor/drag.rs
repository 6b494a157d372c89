use globeshape_core::Globe;

use super::ShapeEditor;
use crate::annotation::center_marker;
use crate::control_points::ControlPointKey;
use crate::error::{EditorError, EditorResult};
use crate::gesture::{ClickGesture, DragTarget, Gesture};
use crate::model::{EditableGeometry, ShapeType};
use crate::render::RenderSink;
use crate::reshape::ReshapeOutcome;
use crate::view::{PickedObject, SceneView, ScreenPoint};

impl<G: Globe, V: SceneView, S: RenderSink> ShapeEditor<G, V, S> {
    /// What a pointer-down at `at` would drag. Control points win over the body.
    pub(super) fn pick_drag_target(&self, at: ScreenPoint) -> Option<DragTarget> {
        let target_id = self.target.as_ref()?.id;
        let picked = self.view.pick(at);

        picked
            .iter()
            .find_map(|object| match object {
                PickedObject::ControlPoint(key) if self.control_points.contains(*key) => {
                    Some(DragTarget::ControlPoint(*key))
                }
                _ => None,
            })
            .or_else(|| {
                picked
                    .contains(&PickedObject::Shape(target_id))
                    .then_some(DragTarget::Body)
            })
    }

    pub(super) fn apply_gesture(&mut self, gesture: Gesture, at: ScreenPoint) -> EditorResult<()> {
        match gesture {
            Gesture::Ignored => Ok(()),
            Gesture::BeginDrag {
                target,
                interrupted,
            } => {
                if interrupted {
                    self.finish_drag();
                }
                self.begin_drag(target, at);
                Ok(())
            }
            Gesture::Drag { target, from, to } => self.drag(target, from, to),
            Gesture::EndDrag { click, .. } => {
                self.finish_drag();
                let result = match click {
                    Some(ClickGesture::InsertVertex) => self.insert_vertex(at),
                    Some(ClickGesture::DeleteVertex(key)) => self.delete_vertex(key),
                    None => Ok(()),
                };
                self.sink.redraw();
                result
            }
        }
    }

    fn begin_drag(&mut self, target: DragTarget, at: ScreenPoint) {
        self.show_shadow();
        self.engine.begin(self.view.pick_terrain(at));
        tracing::debug!("Begin drag of {:?}", target);
    }

    fn finish_drag(&mut self) {
        self.remove_shadow();
        self.update_annotation(None);
        self.engine.end();
        tracing::debug!("End drag");
    }

    fn drag(&mut self, target: DragTarget, from: ScreenPoint, to: ScreenPoint) -> EditorResult<()> {
        let Some(terrain) = self.view.pick_terrain(to) else {
            return Ok(());
        };

        match target {
            DragTarget::ControlPoint(key) => {
                let control_point = self
                    .control_points
                    .find(key)
                    .cloned()
                    .ok_or(EditorError::UnknownControlPoint { key })?;
                let shape = &mut self.target.as_mut().ok_or(EditorError::NoTargetShape)?.shape;
                self.engine
                    .reshape(&self.globe, shape, &control_point, terrain)?;

                self.sync_control_points();
                let refreshed = self.control_points.find(key).cloned();
                self.update_annotation(refreshed);
            }
            DragTarget::Body => {
                self.move_body(from, to)?;
                self.sync_control_points();

                let center = self.target.as_ref().and_then(|target| {
                    match target.shape.shape_type() {
                        ShapeType::Rectangle | ShapeType::Ellipse => target.shape.center(),
                        _ => None,
                    }
                });
                self.update_annotation(center.map(center_marker));
            }
        }

        self.sink.redraw();
        Ok(())
    }

    /// Move the shape so its reference point follows the pointer's screen delta.
    fn move_body(&mut self, from: ScreenPoint, to: ScreenPoint) -> EditorResult<()> {
        let target = self.target.as_mut().ok_or(EditorError::NoTargetShape)?;
        let Some(reference) = target.shape.reference_position() else {
            return Ok(());
        };

        let reference_point = self.globe.location_to_point(&reference.location());
        let Some(screen) = self.view.project(&reference_point) else {
            return Ok(());
        };
        let moved = ScreenPoint::new(screen.x + to.x - from.x, screen.y + to.y - from.y);

        let Some(ray) = self.view.ray_through_screen_point(moved) else {
            return Ok(());
        };
        let Some(hit) = self.globe.intersect_ray(&ray) else {
            return Ok(());
        };
        let position = self.globe.point_to_position(&hit)?;

        target.shape.move_to(&self.globe, &position.location())?;
        Ok(())
    }

    fn insert_vertex(&mut self, at: ScreenPoint) -> EditorResult<()> {
        let target_id = self.target.as_ref().ok_or(EditorError::NoTargetShape)?.id;
        if !self.view.pick(at).contains(&PickedObject::Shape(target_id)) {
            return Ok(());
        }
        let Some(terrain) = self.view.pick_terrain(at) else {
            return Ok(());
        };

        let target = self.target.as_mut().ok_or(EditorError::NoTargetShape)?;
        if let Some(index) = target.shape.insert_vertex_near(&self.globe, &terrain)? {
            tracing::debug!("Inserted vertex {} into shape {}", index, target_id);
            self.sync_control_points();
        }
        Ok(())
    }

    fn delete_vertex(&mut self, key: ControlPointKey) -> EditorResult<()> {
        let target = self.target.as_mut().ok_or(EditorError::NoTargetShape)?;

        match target.shape.delete_vertex(key.id) {
            ReshapeOutcome::Applied => {
                tracing::debug!("Deleted vertex {} from shape {}", key.id, target.id);
                self.sync_control_points();
            }
            ReshapeOutcome::Rejected(rejection) => {
                tracing::warn!("Rejected deletion of vertex {}: {:?}", key.id, rejection);
            }
            ReshapeOutcome::Anchored | ReshapeOutcome::Ignored => {}
        }
        Ok(())
    }
}
