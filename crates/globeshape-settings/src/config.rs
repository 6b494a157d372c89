//! Configuration for the shape editor
//!
//! Provides configuration file handling and validation for the editor.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Control-point marker styling
//! - Orientation line and annotation styling
//! - Drag shadow appearance
//! - Gesture modifier bindings
//! - Globe parameters and picking tolerances

use globeshape_core::{Color, Ellipsoid};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Keyboard modifier that can be bound to a click gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Shift key
    Shift,
    /// Alt (Option) key
    Alt,
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shift => write!(f, "shift"),
            Self::Alt => write!(f, "alt"),
        }
    }
}

/// Control-point marker styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSettings {
    /// Marker image scale
    pub image_scale: f64,
    /// Color of vertex (location) markers
    pub location_color: Color,
    /// Color of width/height/radius markers
    pub size_color: Color,
    /// Color of rotation markers
    pub angle_color: Color,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self {
            image_scale: 6.0,
            location_color: Color::BLUE,
            size_color: Color::CYAN,
            angle_color: Color::GREEN,
        }
    }
}

/// Line drawn from a shape's center to its rotation handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationLineSettings {
    /// Outline width in pixels
    pub width: f64,
    /// Outline color
    pub color: Color,
}

impl Default for OrientationLineSettings {
    fn default() -> Self {
        Self {
            width: 2.0,
            color: Color::GREEN,
        }
    }
}

/// Floating annotation shown while dragging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationSettings {
    /// Font size in points
    pub font_size: f64,
    /// Corner radius of the callout
    pub corner_radius: f64,
    /// Inset applied on every side of the text
    pub insets: f64,
    /// Callout fill
    pub background_color: Color,
    /// Text color
    pub text_color: Color,
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            corner_radius: 5.0,
            insets: 5.0,
            background_color: Color::new(0.67, 0.67, 0.67, 0.8),
            text_color: Color::BLACK,
        }
    }
}

/// Translucent copy of the shape shown during a drag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowSettings {
    /// Interior alpha applied to opaque highlight interiors
    pub interior_alpha: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            interior_alpha: 0.7,
        }
    }
}

/// Modifier bindings for click gestures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Held while clicking a shape edge to insert a vertex
    pub insert_vertex: Modifier,
    /// Held while clicking a vertex marker to delete it
    pub delete_vertex: Modifier,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            insert_vertex: Modifier::Shift,
            delete_vertex: Modifier::Alt,
        }
    }
}

/// Reference ellipsoid parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeSettings {
    /// Semi-major axis in meters
    pub equatorial_radius: f64,
    /// First eccentricity squared
    pub eccentricity_squared: f64,
}

impl Default for GlobeSettings {
    fn default() -> Self {
        let wgs84 = Ellipsoid::wgs84();
        Self {
            equatorial_radius: wgs84.equatorial_radius,
            eccentricity_squared: wgs84.eccentricity_squared,
        }
    }
}

impl GlobeSettings {
    /// Build the ellipsoid described by these settings
    pub fn ellipsoid(&self) -> Ellipsoid {
        Ellipsoid::new(self.equatorial_radius, self.eccentricity_squared)
    }
}

/// Hit-testing tolerances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickingSettings {
    /// Screen distance within which a marker is picked, in pixels
    pub marker_radius_px: f64,
    /// Distance from a polyline within which it is picked, in meters
    pub line_tolerance_m: f64,
}

impl Default for PickingSettings {
    fn default() -> Self {
        Self {
            marker_radius_px: 8.0,
            line_tolerance_m: 500.0,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Control-point markers
    pub markers: MarkerSettings,
    /// Orientation line
    pub orientation_line: OrientationLineSettings,
    /// Drag annotation
    pub annotation: AnnotationSettings,
    /// Drag shadow
    pub shadow: ShadowSettings,
    /// Gesture bindings
    pub gestures: GestureSettings,
    /// Globe parameters
    pub globe: GlobeSettings,
    /// Picking tolerances
    pub picking: PickingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (.json or .toml)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (.json or .toml)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        tracing::debug!("Saved editor config to {}", path.display());
        Ok(())
    }

    /// Validate all sections
    pub fn validate(&self) -> SettingsResult<()> {
        if self.markers.image_scale <= 0.0 {
            return Err(SettingsError::invalid(
                "markers.image_scale",
                "must be > 0",
            ));
        }

        if self.orientation_line.width <= 0.0 {
            return Err(SettingsError::invalid(
                "orientation_line.width",
                "must be > 0",
            ));
        }

        if self.annotation.font_size <= 0.0 {
            return Err(SettingsError::invalid("annotation.font_size", "must be > 0"));
        }

        if self.annotation.corner_radius < 0.0 || self.annotation.insets < 0.0 {
            return Err(SettingsError::invalid(
                "annotation",
                "corner radius and insets must be >= 0",
            ));
        }

        if !(self.shadow.interior_alpha > 0.0 && self.shadow.interior_alpha <= 1.0) {
            return Err(SettingsError::invalid(
                "shadow.interior_alpha",
                "must be in (0, 1]",
            ));
        }

        if self.gestures.insert_vertex == self.gestures.delete_vertex {
            return Err(SettingsError::invalid(
                "gestures",
                format!(
                    "insert and delete are both bound to {}",
                    self.gestures.insert_vertex
                ),
            ));
        }

        if self.globe.equatorial_radius <= 0.0 {
            return Err(SettingsError::invalid(
                "globe.equatorial_radius",
                "must be > 0",
            ));
        }

        if !(0.0..1.0).contains(&self.globe.eccentricity_squared) {
            return Err(SettingsError::invalid(
                "globe.eccentricity_squared",
                "must be in [0, 1)",
            ));
        }

        if self.picking.marker_radius_px <= 0.0 || self.picking.line_tolerance_m <= 0.0 {
            return Err(SettingsError::invalid("picking", "tolerances must be > 0"));
        }

        Ok(())
    }
}

/// Default location of the editor config file: `<config_dir>/globeshape/editor.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("globeshape").join("editor.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })
}
