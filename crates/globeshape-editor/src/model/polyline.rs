use globeshape_core::{nearest_point_on_segment, GeoError, Globe, Location, Position, Vec3};
use serde::{Deserialize, Serialize};
use std::slice;

use super::{vertices, EditableGeometry};
use crate::control_points::ControlPointLayout;
use crate::reshape::{ReshapeContext, ReshapeOutcome};

/// Fewest vertices a polyline may keep.
pub const MIN_POLYLINE_VERTICES: usize = 2;

/// An open surface polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPolyline {
    pub vertices: Vec<Position>,
}

impl GeoPolyline {
    pub fn new(vertices: Vec<Position>) -> Self {
        Self { vertices }
    }

    fn as_rings(&self) -> &[Vec<Position>] {
        slice::from_ref(&self.vertices)
    }

    fn as_rings_mut(&mut self) -> &mut [Vec<Position>] {
        slice::from_mut(&mut self.vertices)
    }

    pub fn delete_vertex(&mut self, id: usize) -> ReshapeOutcome {
        vertices::delete(self.as_rings_mut(), id, MIN_POLYLINE_VERTICES)
    }

    pub fn insert_vertex_near(
        &mut self,
        globe: &dyn Globe,
        pick: &Position,
    ) -> Result<Option<usize>, GeoError> {
        vertices::insert_near(globe, self.as_rings_mut(), false, pick)
    }
}

impl EditableGeometry for GeoPolyline {
    fn control_points(&self, globe: &dyn Globe, heading: f64) -> ControlPointLayout {
        vertices::layout(globe, self.as_rings(), heading)
    }

    fn reshape(&mut self, ctx: &mut ReshapeContext<'_>) -> Result<ReshapeOutcome, GeoError> {
        vertices::reshape(self.as_rings_mut(), ctx)
    }

    fn reference_position(&self) -> Option<Position> {
        self.vertices.first().copied()
    }

    fn move_to(&mut self, globe: &dyn Globe, location: &Location) -> Result<(), GeoError> {
        let Some(reference) = self.reference_position() else {
            return Ok(());
        };
        vertices::translate(globe, self.as_rings_mut(), &reference, location)
    }

    fn contains_location(&self, globe: &dyn Globe, location: &Location, tolerance: f64) -> bool {
        let point = globe.location_to_point(location);
        let points: Vec<Vec3> = self
            .vertices
            .iter()
            .map(|p| globe.location_to_point(&p.location()))
            .collect();

        points.windows(2).any(|edge| {
            let nearest = nearest_point_on_segment(&edge[0], &edge[1], &point);
            (nearest - point).norm() <= tolerance
        })
    }

    fn center(&self) -> Option<Location> {
        None
    }
}
