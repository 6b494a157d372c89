//! Scene view: picking and screen projection.
//!
//! [`SceneView`] is what the editor needs from the host's viewer. The
//! [`LookAtView`] implementation is a perspective camera hanging above a
//! location; it hit-tests against the candidates the editor pushes to it.

use globeshape_core::{GeoError, Globe, Location, Position, Ray, Vec3};
use globeshape_settings::PickingSettings;
use serde::{Deserialize, Serialize};

use crate::control_points::ControlPointKey;
use crate::model::{EditableGeometry, Shape};

/// A point in client coordinates: origin top-left, y down, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Something under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum PickedObject {
    Terrain(Position),
    /// A shape, by host id
    Shape(u64),
    ControlPoint(ControlPointKey),
}

/// Something the editor has drawn and wants to be pickable.
#[derive(Debug, Clone, PartialEq)]
pub enum PickCandidate {
    ControlPoint {
        key: ControlPointKey,
        position: Position,
    },
    Shape {
        id: u64,
        shape: Shape,
    },
}

pub trait SceneView {
    /// Everything under `at`, nearest first.
    fn pick(&self, at: ScreenPoint) -> Vec<PickedObject>;

    /// Terrain position under `at`.
    fn pick_terrain(&self, at: ScreenPoint) -> Option<Position>;

    /// Screen position of a Cartesian point, if it is in front of the camera.
    fn project(&self, point: &Vec3) -> Option<ScreenPoint>;

    /// Ray from the eye through `at`.
    fn ray_through_screen_point(&self, at: ScreenPoint) -> Option<Ray>;

    /// Called after every control point synchronisation.
    fn update_pick_candidates(&mut self, _candidates: &[PickCandidate]) {}
}

/// Perspective camera looking straight down at a location.
#[derive(Debug, Clone)]
pub struct LookAtView<G: Globe> {
    globe: G,
    eye: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    focal_length: f64,
    width: f64,
    height: f64,
    picking: PickingSettings,
    candidates: Vec<PickCandidate>,
}

impl<G: Globe> LookAtView<G> {
    /// Camera `range` meters above `look_at`, with a `width` x `height` viewport
    /// and a vertical field of view of `fov_degrees`.
    pub fn new(
        globe: G,
        look_at: Location,
        range: f64,
        width: f64,
        height: f64,
        fov_degrees: f64,
    ) -> Result<Self, GeoError> {
        look_at.validate()?;

        let eye = globe.position_to_point(&look_at.at_altitude(range));
        let target = globe.location_to_point(&look_at);
        let forward = (target - eye).normalize();

        let lat = look_at.latitude.to_radians();
        let lon = look_at.longitude.to_radians();
        let north = Vec3::new(-lat.sin() * lon.sin(), lat.cos(), -lat.sin() * lon.cos());
        let up = (north - forward * north.dot(&forward)).normalize();
        let right = forward.cross(&up);

        let focal_length = (height / 2.0) / (fov_degrees.to_radians() / 2.0).tan();

        Ok(Self {
            globe,
            eye,
            forward,
            right,
            up,
            focal_length,
            width,
            height,
            picking: PickingSettings::default(),
            candidates: Vec::new(),
        })
    }

    pub fn with_picking(mut self, picking: PickingSettings) -> Self {
        self.picking = picking;
        self
    }

    pub fn globe(&self) -> &G {
        &self.globe
    }

    pub fn candidates(&self) -> &[PickCandidate] {
        &self.candidates
    }

    /// Screen position of a geodetic position.
    pub fn project_position(&self, position: &Position) -> Option<ScreenPoint> {
        self.project(&self.globe.position_to_point(position))
    }

    fn contains(&self, at: &ScreenPoint) -> bool {
        (0.0..=self.width).contains(&at.x) && (0.0..=self.height).contains(&at.y)
    }
}

impl<G: Globe> SceneView for LookAtView<G> {
    fn pick(&self, at: ScreenPoint) -> Vec<PickedObject> {
        let mut markers: Vec<(f64, ControlPointKey)> = self
            .candidates
            .iter()
            .filter_map(|candidate| match candidate {
                PickCandidate::ControlPoint { key, position } => {
                    let screen = self.project_position(position)?;
                    let distance = screen.distance_to(&at);
                    (distance <= self.picking.marker_radius_px).then_some((distance, *key))
                }
                PickCandidate::Shape { .. } => None,
            })
            .collect();
        markers.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut picked: Vec<PickedObject> = markers
            .into_iter()
            .map(|(_, key)| PickedObject::ControlPoint(key))
            .collect();

        if let Some(terrain) = self.pick_terrain(at) {
            let location = terrain.location();
            for candidate in &self.candidates {
                if let PickCandidate::Shape { id, shape } = candidate {
                    let tolerance = self.picking.line_tolerance_m;
                    if shape.contains_location(&self.globe, &location, tolerance) {
                        picked.push(PickedObject::Shape(*id));
                    }
                }
            }
            picked.push(PickedObject::Terrain(terrain));
        }

        picked
    }

    fn pick_terrain(&self, at: ScreenPoint) -> Option<Position> {
        if !self.contains(&at) {
            return None;
        }
        let ray = self.ray_through_screen_point(at)?;
        let hit = self.globe.intersect_ray(&ray)?;
        self.globe.point_to_position(&hit).ok()
    }

    fn project(&self, point: &Vec3) -> Option<ScreenPoint> {
        let v = point - self.eye;
        let depth = v.dot(&self.forward);
        if depth <= 0.0 {
            return None;
        }
        Some(ScreenPoint::new(
            self.width / 2.0 + self.focal_length * v.dot(&self.right) / depth,
            self.height / 2.0 - self.focal_length * v.dot(&self.up) / depth,
        ))
    }

    fn ray_through_screen_point(&self, at: ScreenPoint) -> Option<Ray> {
        let direction = self.forward * self.focal_length + self.right * (at.x - self.width / 2.0)
            - self.up * (at.y - self.height / 2.0);
        Some(Ray::new(self.eye, direction.normalize()))
    }

    fn update_pick_candidates(&mut self, candidates: &[PickCandidate]) {
        self.candidates = candidates.to_vec();
    }
}
