use globeshape_core::{GeoError, Globe, Location, Position};
use serde::{Deserialize, Serialize};

use super::{vertices, EditableGeometry};
use crate::control_points::ControlPointLayout;
use crate::reshape::{ReshapeContext, ReshapeOutcome};

/// Fewest vertices a polygon ring may keep.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A surface polygon. The first ring is the outer boundary, later rings are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPolygon {
    pub rings: Vec<Vec<Position>>,
}

impl GeoPolygon {
    pub fn new(outer: Vec<Position>) -> Self {
        Self { rings: vec![outer] }
    }

    pub fn with_holes(outer: Vec<Position>, holes: Vec<Vec<Position>>) -> Self {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(outer);
        rings.extend(holes);
        Self { rings }
    }

    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }

    pub fn delete_vertex(&mut self, id: usize) -> ReshapeOutcome {
        vertices::delete(&mut self.rings, id, MIN_POLYGON_VERTICES)
    }

    pub fn insert_vertex_near(
        &mut self,
        globe: &dyn Globe,
        pick: &Position,
    ) -> Result<Option<usize>, GeoError> {
        vertices::insert_near(globe, &mut self.rings, true, pick)
    }
}

/// Even-odd ray casting in latitude/longitude space.
fn ring_contains(ring: &[Position], location: &Location) -> bool {
    let (x, y) = (location.longitude, location.latitude);
    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);

    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].longitude, ring[i].latitude);
        let (xj, yj) = (ring[j].longitude, ring[j].latitude);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

impl EditableGeometry for GeoPolygon {
    fn control_points(&self, globe: &dyn Globe, heading: f64) -> ControlPointLayout {
        vertices::layout(globe, &self.rings, heading)
    }

    fn reshape(&mut self, ctx: &mut ReshapeContext<'_>) -> Result<ReshapeOutcome, GeoError> {
        vertices::reshape(&mut self.rings, ctx)
    }

    fn reference_position(&self) -> Option<Position> {
        self.rings.first().and_then(|ring| ring.first()).copied()
    }

    fn move_to(&mut self, globe: &dyn Globe, location: &Location) -> Result<(), GeoError> {
        let Some(reference) = self.reference_position() else {
            return Ok(());
        };
        vertices::translate(globe, &mut self.rings, &reference, location)
    }

    fn contains_location(&self, _globe: &dyn Globe, location: &Location, _tolerance: f64) -> bool {
        let Some((outer, holes)) = self.rings.split_first() else {
            return false;
        };
        outer.len() >= MIN_POLYGON_VERTICES
            && ring_contains(outer, location)
            && !holes.iter().any(|hole| ring_contains(hole, location))
    }

    fn center(&self) -> Option<Location> {
        None
    }
}
