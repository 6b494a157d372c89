use globeshape_core::Globe;
use globeshape_settings::EditorConfig;

use super::ShapeEditor;
use crate::control_points::ControlPointSet;
use crate::error::{EditorError, EditorResult};
use crate::gesture::GestureState;
use crate::render::RenderSink;
use crate::reshape::ReshapeEngine;
use crate::view::SceneView;

/// Collects the editor's collaborators.
///
/// The globe, view and sink are required; the configuration defaults.
pub struct ShapeEditorBuilder<G, V, S> {
    globe: Option<G>,
    view: Option<V>,
    sink: Option<S>,
    config: Option<EditorConfig>,
}

impl<G, V, S> Default for ShapeEditorBuilder<G, V, S> {
    fn default() -> Self {
        Self {
            globe: None,
            view: None,
            sink: None,
            config: None,
        }
    }
}

impl<G: Globe, V: SceneView, S: RenderSink> ShapeEditorBuilder<G, V, S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn globe(mut self, globe: G) -> Self {
        self.globe = Some(globe);
        self
    }

    pub fn view(mut self, view: V) -> Self {
        self.view = Some(view);
        self
    }

    pub fn sink(mut self, sink: S) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> EditorResult<ShapeEditor<G, V, S>> {
        let globe = self.globe.ok_or(EditorError::MissingCollaborator("globe"))?;
        let view = self.view.ok_or(EditorError::MissingCollaborator("scene view"))?;
        let sink = self.sink.ok_or(EditorError::MissingCollaborator("render sink"))?;
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(ShapeEditor {
            globe,
            view,
            sink,
            config,
            armed: false,
            target: None,
            control_points: ControlPointSet::new(),
            engine: ReshapeEngine::new(),
            gesture: GestureState::Idle,
            saved_highlight: None,
        })
    }
}
