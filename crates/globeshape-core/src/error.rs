//! Error handling for globeshape
//!
//! Provides the error types raised by the geometry layer:
//! - Non-finite Cartesian points
//! - Invalid coordinates
//! - Empty geometry handed to an aggregate such as a centroid
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents failures converting between geodetic and Cartesian space or
/// operating on geometry that has nothing to operate on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A Cartesian point had a NaN or infinite component
    #[error("Non-finite Cartesian point ({x}, {y}, {z})")]
    NonFinitePoint {
        /// The X component.
        x: f64,
        /// The Y component.
        y: f64,
        /// The Z component.
        z: f64,
    },

    /// A latitude or longitude was outside its valid range or not finite
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// The offending latitude in degrees.
        latitude: f64,
        /// The offending longitude in degrees.
        longitude: f64,
    },

    /// An operation needed at least one location
    #[error("Geometry has no locations: {context}")]
    EmptyGeometry {
        /// What was being computed.
        context: String,
    },
}
