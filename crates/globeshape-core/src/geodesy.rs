//! Great-circle navigation on the unit sphere.
//!
//! Angles in and out are degrees, except angular distances which are radians
//! of arc. These formulas treat latitude/longitude as spherical; callers that
//! need meters multiply by the globe's equatorial radius.

use std::f64::consts::TAU;

use crate::position::{Location, Position};

/// Initial bearing from `from` to `to`, in degrees clockwise from north.
///
/// Coincident points yield 0. Points on the same meridian yield 0 or 180.
pub fn great_circle_azimuth(from: &Location, to: &Location) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();

    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    if lon1 == lon2 {
        return if lat1 > lat2 { 180.0 } else { 0.0 };
    }

    let y = lat2.cos() * (lon2 - lon1).sin();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lon2 - lon1).cos();
    let azimuth = y.atan2(x);

    if azimuth.is_nan() {
        0.0
    } else {
        azimuth.to_degrees()
    }
}

/// Angular separation between two locations, in radians (haversine).
pub fn great_circle_distance(from: &Location, to: &Location) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();

    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let a = ((lat2 - lat1) / 2.0).sin();
    let b = ((lon2 - lon1) / 2.0).sin();
    let c = a * a + lat1.cos() * lat2.cos() * b * b;
    let distance = 2.0 * c.sqrt().min(1.0).asin();

    if distance.is_nan() {
        0.0
    } else {
        distance
    }
}

/// Destination reached by travelling `distance` radians from `origin` along `azimuth` degrees.
pub fn great_circle_location(origin: &Location, azimuth: f64, distance: f64) -> Location {
    if distance == 0.0 {
        return *origin;
    }

    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();
    let az = azimuth.to_radians();

    let lat2 = (lat1.sin() * distance.cos() + lat1.cos() * distance.sin() * az.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let lon2 = lon1
        + (az.sin() * distance.sin() * lat1.cos())
            .atan2(distance.cos() - lat1.sin() * lat2.sin());

    if lat2.is_nan() || lon2.is_nan() {
        return *origin;
    }

    Location::new(
        lat2.to_degrees().clamp(-90.0, 90.0),
        normalized_longitude(lon2.to_degrees()),
    )
}

/// Wraps a longitude into [-180, 180].
pub fn normalized_longitude(degrees: f64) -> f64 {
    let lon = degrees % 360.0;
    if lon > 180.0 {
        lon - 360.0
    } else if lon < -180.0 {
        lon + 360.0
    } else {
        lon
    }
}

/// Adds `delta` to `base` and normalizes the result into [0, 360) degrees.
pub fn normalized_heading(base: f64, delta: f64) -> f64 {
    let mut heading = base.to_radians() + delta.to_radians();

    if heading.abs() >= TAU {
        heading %= TAU;
    }

    if heading < 0.0 {
        heading += TAU;
    }

    let degrees = heading.to_degrees();
    // A value just below a full turn can round up to exactly 360.
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Rotates every position about `center` by `delta` degrees.
///
/// Each position keeps its great-circle distance from the center; only its
/// azimuth changes. Results are surface positions.
pub fn rotate_locations(center: &Location, delta: f64, positions: &mut [Position]) {
    for position in positions.iter_mut() {
        let location = position.location();
        let heading = great_circle_azimuth(center, &location);
        let distance = great_circle_distance(center, &location);
        let rotated = great_circle_location(center, heading + delta, distance);
        *position = Position::from(rotated);
    }
}
