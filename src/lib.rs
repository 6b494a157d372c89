//! # globeshape
//!
//! Interactive editing of surface shapes on a globe:
//! - Polygons (with holes), polylines, circles, rectangles and ellipses
//! - Control points for vertices, sizes and headings
//! - Drag, rotate, move, insert and delete through pointer gestures
//!
//! ## Architecture
//!
//! globeshape is organized as a workspace with multiple crates:
//!
//! 1. **globeshape-core** - Geodetic types, great-circle math, the globe abstraction
//! 2. **globeshape-settings** - Editor configuration and its JSON/TOML persistence
//! 3. **globeshape-editor** - Control points, reshape rules, gesture FSM, editor session
//! 4. **globeshape** - This crate: logging setup and the replay command line

pub mod replay;

pub use globeshape_core::{Color, Ellipsoid, GeoError, Globe, Location, Position, Ray, Vec3};
pub use globeshape_editor::{
    ControlPoint, ControlPointKey, ControlPointPurpose, EditableGeometry, EditableShape,
    EditorError, GeoCircle, GeoEllipse, GeoPolygon, GeoPolyline, GeoRectangle, Layer,
    LookAtView, PointerEvent, RenderSink, ReshapeOutcome, SceneLayers, SceneView, Shape,
    ShapeEditor, ShapeEditorBuilder,
};
pub use globeshape_settings::{default_config_path, EditorConfig, SettingsError};
pub use replay::{handles, replay, Camera, ReplayOutput, ReplayScript};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version string shown by `--version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to command results
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
