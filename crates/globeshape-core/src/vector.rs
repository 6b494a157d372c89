//! Cartesian vectors and rays.

use nalgebra::Vector3;

/// A point or direction in globe-centred Cartesian space, in meters.
pub type Vec3 = Vector3<f64>;

/// A half-line starting at `origin` and extending along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray.
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Closest point to `point` on the segment `p1`-`p2`.
///
/// Projects onto the line through the endpoints and clamps to the segment.
/// A zero-length segment returns `p1`.
pub fn nearest_point_on_segment(p1: &Vec3, p2: &Vec3, point: &Vec3) -> Vec3 {
    let segment = p2 - p1;
    let length = segment.norm();
    if length == 0.0 {
        return *p1;
    }

    let direction = segment / length;
    let dot = (point - p1).dot(&direction);

    if dot <= 0.0 {
        *p1
    } else if dot >= length {
        *p2
    } else {
        p1 + direction * dot
    }
}
