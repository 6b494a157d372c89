//! Error types for the editor crate.

use globeshape_core::GeoError;
use globeshape_settings::SettingsError;
use thiserror::Error;

use crate::control_points::ControlPointKey;

/// Errors raised while building or driving a shape editor.
#[derive(Error, Debug)]
pub enum EditorError {
    /// A required collaborator was not supplied to the builder.
    #[error("Shape editor requires a {0}")]
    MissingCollaborator(&'static str),

    /// An operation needed a shape but none is being edited.
    #[error("No shape is being edited")]
    NoTargetShape,

    /// A control point key did not match any control point in the arena.
    #[error("Unknown control point {key}")]
    UnknownControlPoint { key: ControlPointKey },

    /// A globe conversion failed.
    #[error("Geometry error: {0}")]
    Geo(#[from] GeoError),

    /// The configuration was rejected.
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
