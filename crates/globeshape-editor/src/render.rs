//! Render sink: the layers the editor draws into.
//!
//! The editor never rasterises anything. It describes what should be visible
//! as [`Renderable`]s placed on [`Layer`]s and lets the host draw them.
//! [`SceneLayers`] keeps everything in memory for headless hosts and tests.

use globeshape_core::{Color, Position};
use globeshape_settings::AnnotationSettings;
use std::collections::BTreeMap;

use crate::control_points::ControlPoint;
use crate::model::{Shape, ShapeAttributes};

/// Layers owned by the editor while it is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    ControlPoints,
    /// Orientation line
    Accessory,
    Annotation,
    /// Stationary copy of the shape shown during a drag
    Shadow,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Layer::ControlPoints,
        Layer::Accessory,
        Layer::Annotation,
        Layer::Shadow,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    Marker {
        control_point: ControlPoint,
        color: Color,
        image_scale: f64,
    },
    OrientationLine {
        /// Empty until the shape has a rotation handle
        positions: Vec<Position>,
        color: Color,
        width: f64,
    },
    Annotation {
        position: Position,
        text: String,
        style: AnnotationSettings,
    },
    Shadow {
        shape: Shape,
        attributes: ShapeAttributes,
    },
}

pub trait RenderSink {
    fn attach_layer(&mut self, layer: Layer);
    fn detach_layer(&mut self, layer: Layer);
    fn add_renderable(&mut self, layer: Layer, renderable: Renderable);
    fn remove_all_renderables(&mut self, layer: Layer);
    /// Replace the renderable at `index`; returns false when there is none.
    fn replace_renderable(&mut self, layer: Layer, index: usize, renderable: Renderable) -> bool;
    fn set_layer_enabled(&mut self, layer: Layer, enabled: bool);
    fn redraw(&mut self);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerState {
    pub attached: bool,
    pub enabled: bool,
    pub renderables: Vec<Renderable>,
}

/// In-memory render sink.
#[derive(Debug, Clone, Default)]
pub struct SceneLayers {
    layers: BTreeMap<Layer, LayerState>,
    redraws: usize,
}

impl SceneLayers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layer(&self, layer: Layer) -> Option<&LayerState> {
        self.layers.get(&layer)
    }

    pub fn renderables(&self, layer: Layer) -> &[Renderable] {
        self.layers
            .get(&layer)
            .map(|state| state.renderables.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_attached(&self, layer: Layer) -> bool {
        self.layers.get(&layer).is_some_and(|state| state.attached)
    }

    pub fn is_enabled(&self, layer: Layer) -> bool {
        self.layers
            .get(&layer)
            .is_some_and(|state| state.attached && state.enabled)
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    fn state_mut(&mut self, layer: Layer) -> &mut LayerState {
        self.layers.entry(layer).or_default()
    }
}

impl RenderSink for SceneLayers {
    fn attach_layer(&mut self, layer: Layer) {
        let state = self.state_mut(layer);
        state.attached = true;
        state.enabled = true;
    }

    fn detach_layer(&mut self, layer: Layer) {
        self.layers.remove(&layer);
    }

    fn add_renderable(&mut self, layer: Layer, renderable: Renderable) {
        self.state_mut(layer).renderables.push(renderable);
    }

    fn remove_all_renderables(&mut self, layer: Layer) {
        if let Some(state) = self.layers.get_mut(&layer) {
            state.renderables.clear();
        }
    }

    fn replace_renderable(&mut self, layer: Layer, index: usize, renderable: Renderable) -> bool {
        match self
            .layers
            .get_mut(&layer)
            .and_then(|state| state.renderables.get_mut(index))
        {
            Some(slot) => {
                *slot = renderable;
                true
            }
            None => false,
        }
    }

    fn set_layer_enabled(&mut self, layer: Layer, enabled: bool) {
        self.state_mut(layer).enabled = enabled;
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }
}
