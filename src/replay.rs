//! Headless replay of pointer event scripts.
//!
//! A script names a shape, a camera hanging above the globe and the pointer
//! events a user produced in that camera's viewport. Replaying arms a
//! [`ShapeEditor`] over an in-memory [`SceneLayers`] sink and feeds it the
//! events in order.

use anyhow::{Context, Result};
use globeshape_core::{Globe, Location};
use globeshape_editor::{
    ControlPoint, EditableGeometry, EditableShape, LookAtView, PointerEvent, SceneLayers, Shape,
    ShapeEditor,
};
use globeshape_settings::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_width() -> f64 {
    800.0
}

fn default_height() -> f64 {
    600.0
}

fn default_fov() -> f64 {
    45.0
}

/// Perspective camera looking straight down at `look_at` from `range` meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub look_at: Location,
    pub range: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_fov")]
    pub fov_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub shape: EditableShape,
    pub camera: Camera,
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

impl ReplayScript {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse replay script {}", path.display()))
    }
}

/// State of the editor after the last event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayOutput {
    pub shape: EditableShape,
    /// Heading accumulated by polygon and polyline rotation
    pub heading: f64,
    pub control_points: Vec<ControlPoint>,
    pub redraws: usize,
}

/// Feed every event of `script` to a freshly armed editor.
pub fn replay(script: ReplayScript, config: EditorConfig) -> Result<ReplayOutput> {
    let globe = config.globe.ellipsoid();
    let camera = &script.camera;
    let view = LookAtView::new(
        globe,
        camera.look_at,
        camera.range,
        camera.width,
        camera.height,
        camera.fov_degrees,
    )
    .context("Invalid camera")?
    .with_picking(config.picking.clone());

    let mut editor = ShapeEditor::builder()
        .globe(globe)
        .view(view)
        .sink(SceneLayers::new())
        .config(config)
        .build()?;

    editor.set_shape(script.shape);
    editor.set_armed(true);
    for event in &script.events {
        editor.on_gesture_event(event);
    }
    tracing::info!("Replayed {} pointer events", script.events.len());

    let heading = editor.heading();
    let control_points = editor.control_points().as_slice().to_vec();
    let redraws = editor.sink().redraw_count();
    let shape = editor
        .set_armed(false)
        .context("Editor released no shape")?;

    Ok(ReplayOutput {
        shape,
        heading,
        control_points,
        redraws,
    })
}

/// Control points of `shape` before any editing.
pub fn handles<G: Globe>(globe: &G, shape: &Shape) -> Vec<ControlPoint> {
    shape.control_points(globe, 0.0).points
}
