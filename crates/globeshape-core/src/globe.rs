//! Globe abstraction: conversions between geodetic positions and Cartesian points.
//!
//! Cartesian space is Y-up: +Y points at the north pole, +Z at latitude 0 /
//! longitude 0 and +X at latitude 0 / longitude 90.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::position::{Location, Position};
use crate::vector::{Ray, Vec3};

/// WGS84 semi-major axis in meters.
pub const WGS84_EQUATORIAL_RADIUS: f64 = 6_378_137.0;
/// WGS84 first eccentricity squared.
pub const WGS84_ECCENTRICITY_SQUARED: f64 = 0.00669437999013;

const MAX_ITERATIONS: usize = 16;
const LATITUDE_TOLERANCE: f64 = 1e-15;
const POLE_AXIS_DISTANCE: f64 = 1e-9;

/// Converts between geodetic and Cartesian coordinates.
pub trait Globe {
    /// Cartesian point of a geodetic position, altitude included.
    fn position_to_point(&self, position: &Position) -> Vec3;

    /// Geodetic position of a Cartesian point.
    fn point_to_position(&self, point: &Vec3) -> Result<Position, GeoError>;

    /// Semi-major axis in meters.
    fn equatorial_radius(&self) -> f64;

    /// Nearest intersection of `ray` with the globe surface, if any.
    fn intersect_ray(&self, ray: &Ray) -> Option<Vec3>;

    /// Cartesian point of a location on the surface.
    fn location_to_point(&self, location: &Location) -> Vec3 {
        self.position_to_point(&location.at_altitude(0.0))
    }
}

/// An oblate ellipsoid of revolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    pub equatorial_radius: f64,
    pub eccentricity_squared: f64,
}

impl Ellipsoid {
    pub fn new(equatorial_radius: f64, eccentricity_squared: f64) -> Self {
        Self {
            equatorial_radius,
            eccentricity_squared,
        }
    }

    pub fn wgs84() -> Self {
        Self::new(WGS84_EQUATORIAL_RADIUS, WGS84_ECCENTRICITY_SQUARED)
    }

    /// A perfect sphere of the given radius.
    pub fn sphere(radius: f64) -> Self {
        Self::new(radius, 0.0)
    }

    /// Semi-minor (polar) axis in meters.
    pub fn polar_radius(&self) -> f64 {
        self.equatorial_radius * (1.0 - self.eccentricity_squared).sqrt()
    }

    /// Prime vertical radius of curvature at a latitude given by its sine.
    fn prime_vertical_radius(&self, sin_lat: f64) -> f64 {
        self.equatorial_radius / (1.0 - self.eccentricity_squared * sin_lat * sin_lat).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl Globe for Ellipsoid {
    fn position_to_point(&self, position: &Position) -> Vec3 {
        let lat = position.latitude.to_radians();
        let lon = position.longitude.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        let n = self.prime_vertical_radius(sin_lat);
        let h = position.altitude;

        Vec3::new(
            (n + h) * cos_lat * sin_lon,
            (n * (1.0 - self.eccentricity_squared) + h) * sin_lat,
            (n + h) * cos_lat * cos_lon,
        )
    }

    fn point_to_position(&self, point: &Vec3) -> Result<Position, GeoError> {
        let (x, y, z) = (point.x, point.y, point.z);
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(GeoError::NonFinitePoint { x, y, z });
        }

        let e2 = self.eccentricity_squared;
        let p = (x * x + z * z).sqrt();

        if p < POLE_AXIS_DISTANCE {
            let latitude = if y < 0.0 { -90.0 } else { 90.0 };
            return Ok(Position::new(latitude, 0.0, y.abs() - self.polar_radius()));
        }

        let longitude = x.atan2(z);
        let mut lat = y.atan2(p * (1.0 - e2));
        let mut converged = false;
        for _ in 0..MAX_ITERATIONS {
            let n = self.prime_vertical_radius(lat.sin());
            let next = (y + e2 * n * lat.sin()).atan2(p);
            converged = (next - lat).abs() < LATITUDE_TOLERANCE;
            lat = next;
            if converged {
                break;
            }
        }
        if !converged {
            tracing::debug!(
                "Latitude did not converge after {} iterations at ({}, {}, {})",
                MAX_ITERATIONS,
                x,
                y,
                z
            );
        }

        let (sin_lat, cos_lat) = lat.sin_cos();
        let altitude = p * cos_lat + y * sin_lat
            - self.equatorial_radius * (1.0 - e2 * sin_lat * sin_lat).sqrt();

        Ok(Position::new(
            lat.to_degrees(),
            longitude.to_degrees(),
            altitude,
        ))
    }

    fn equatorial_radius(&self) -> f64 {
        self.equatorial_radius
    }

    fn intersect_ray(&self, ray: &Ray) -> Option<Vec3> {
        // Stretch Y so the ellipsoid becomes a sphere of the equatorial radius.
        let stretch = self.equatorial_radius / self.polar_radius();
        let origin = Vec3::new(ray.origin.x, ray.origin.y * stretch, ray.origin.z);
        let direction = Vec3::new(ray.direction.x, ray.direction.y * stretch, ray.direction.z);

        let a = direction.norm_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * origin.dot(&direction);
        let c = origin.norm_squared() - self.equatorial_radius * self.equatorial_radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = (-b - root) / (2.0 * a);
        let far = (-b + root) / (2.0 * a);
        let t = if near >= 0.0 {
            near
        } else if far >= 0.0 {
            far
        } else {
            return None;
        };

        Some(ray.point_at(t))
    }
}

/// Cartesian displacement from `previous` to `current`, altitude included.
pub fn compute_control_point_delta<G: Globe + ?Sized>(
    globe: &G,
    previous: &Position,
    current: &Position,
) -> Vec3 {
    globe.position_to_point(current) - globe.position_to_point(previous)
}

/// Mean of the surface points of `positions`, as a surface position.
///
/// Fails with [`GeoError::EmptyGeometry`] when there is nothing to average.
pub fn centroid<G: Globe + ?Sized>(
    globe: &G,
    positions: &[Position],
) -> Result<Position, GeoError> {
    if positions.is_empty() {
        return Err(GeoError::EmptyGeometry {
            context: "centroid".to_string(),
        });
    }

    let sum = positions
        .iter()
        .map(|p| globe.location_to_point(&p.location()))
        .fold(Vec3::zeros(), |acc, point| acc + point);
    let mean = sum / positions.len() as f64;

    globe.point_to_position(&mean)
}

/// Mean chord distance from `center` to `positions`, in radians of the equatorial radius.
pub fn average_distance<G: Globe + ?Sized>(
    globe: &G,
    center: &Location,
    positions: &[Position],
) -> f64 {
    if positions.is_empty() {
        return 0.0;
    }

    let center_point = globe.location_to_point(center);
    let total: f64 = positions
        .iter()
        .map(|p| (globe.location_to_point(&p.location()) - center_point).norm())
        .sum();

    total / positions.len() as f64 / globe.equatorial_radius()
}
