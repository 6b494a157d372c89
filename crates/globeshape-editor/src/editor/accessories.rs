use globeshape_core::{Globe, Position};
use globeshape_settings::{AnnotationSettings, MarkerSettings, OrientationLineSettings};

use super::ShapeEditor;
use crate::annotation::annotation_text;
use crate::control_points::{ControlPoint, ControlPointPurpose};
use crate::render::{Layer, RenderSink, Renderable};
use crate::view::SceneView;

pub(super) fn marker(settings: &MarkerSettings, control_point: &ControlPoint) -> Renderable {
    let color = match control_point.purpose {
        ControlPointPurpose::Width | ControlPointPurpose::Height => settings.size_color,
        ControlPointPurpose::Rotation => settings.angle_color,
        ControlPointPurpose::Location | ControlPointPurpose::Annotation => settings.location_color,
    };
    Renderable::Marker {
        control_point: control_point.clone(),
        color,
        image_scale: settings.image_scale,
    }
}

pub(super) fn orientation_line(
    settings: &OrientationLineSettings,
    positions: Vec<Position>,
) -> Renderable {
    Renderable::OrientationLine {
        positions,
        color: settings.color,
        width: settings.width,
    }
}

pub(super) fn annotation(
    settings: &AnnotationSettings,
    position: Position,
    text: String,
) -> Renderable {
    Renderable::Annotation {
        position,
        text,
        style: settings.clone(),
    }
}

impl<G: Globe, V: SceneView, S: RenderSink> ShapeEditor<G, V, S> {
    /// Show the stationary copy of the shape and make the dragged shape translucent.
    pub(super) fn show_shadow(&mut self) {
        let Some(target) = self.target.as_mut() else {
            return;
        };

        let original = target.highlight_attributes.clone();
        self.sink.add_renderable(
            Layer::Shadow,
            Renderable::Shadow {
                shape: target.shape.clone(),
                attributes: original.clone(),
            },
        );

        let mut editing = original.clone();
        if editing.interior_color.is_opaque() {
            editing.interior_color = editing
                .interior_color
                .with_alpha(self.config.shadow.interior_alpha);
        }
        target.highlight_attributes = editing;
        self.saved_highlight = Some(original);
    }

    pub(super) fn remove_shadow(&mut self) {
        self.sink.remove_all_renderables(Layer::Shadow);
        if let (Some(saved), Some(target)) = (self.saved_highlight.take(), self.target.as_mut()) {
            target.highlight_attributes = saved;
        }
    }

    /// Label `control_point`, or hide the annotation when there is none.
    pub(super) fn update_annotation(&mut self, control_point: Option<ControlPoint>) {
        let Some(control_point) = control_point else {
            self.sink.set_layer_enabled(Layer::Annotation, false);
            return;
        };

        let text = annotation_text(&control_point);
        self.sink.replace_renderable(
            Layer::Annotation,
            0,
            annotation(
                &self.config.annotation,
                control_point.position.clamped_to_surface(),
                text,
            ),
        );
        self.sink.set_layer_enabled(Layer::Annotation, true);
    }
}
