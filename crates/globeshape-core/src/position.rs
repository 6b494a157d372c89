//! Geodetic positions and locations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GeoError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns an error if either component is not finite or latitude is outside [-90, 90].
    pub fn validate(&self) -> Result<(), GeoError> {
        if !self.latitude.is_finite()
            || !self.longitude.is_finite()
            || self.latitude.abs() > 90.0
        {
            return Err(GeoError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        Ok(())
    }

    /// Places this location at the given altitude.
    pub fn at_altitude(&self, altitude: f64) -> Position {
        Position::new(self.latitude, self.longitude, altitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A latitude/longitude pair in degrees with an altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Creates a position on the surface (altitude 0).
    pub fn surface(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }

    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }

    /// The same latitude and longitude with the altitude dropped to 0.
    pub fn clamped_to_surface(&self) -> Self {
        Self::surface(self.latitude, self.longitude)
    }
}

impl From<Location> for Position {
    fn from(location: Location) -> Self {
        location.at_altitude(0.0)
    }
}

impl From<Position> for Location {
    fn from(position: Position) -> Self {
        position.location()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}, {:.6}, {:.2} m)",
            self.latitude, self.longitude, self.altitude
        )
    }
}
