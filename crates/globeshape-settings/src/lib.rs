//! globeshape Settings Crate
//!
//! Handles editor configuration: styling of control points and accessories,
//! gesture bindings, globe parameters and picking tolerances.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, AnnotationSettings, EditorConfig, GestureSettings, GlobeSettings,
    MarkerSettings, Modifier, OrientationLineSettings, PickingSettings, ShadowSettings,
};
pub use error::{SettingsError, SettingsResult};
