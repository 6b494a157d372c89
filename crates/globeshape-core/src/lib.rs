//! # globeshape Core
//!
//! Core types and math for globeshape.
//! Provides geodetic positions, Cartesian vectors, great-circle navigation,
//! the globe abstraction used to move between the two, and the display
//! formatting shared by the editor's annotations.

pub mod color;
pub mod error;
pub mod geodesy;
pub mod globe;
pub mod position;
pub mod units;
pub mod vector;

pub use color::Color;
pub use error::GeoError;
pub use geodesy::{
    great_circle_azimuth, great_circle_distance, great_circle_location, normalized_heading,
    rotate_locations,
};
pub use globe::{average_distance, centroid, compute_control_point_delta, Ellipsoid, Globe};
pub use position::{Location, Position};
pub use units::{format_latitude, format_length, format_longitude, format_rotation};
pub use vector::{nearest_point_on_segment, Ray, Vec3};
