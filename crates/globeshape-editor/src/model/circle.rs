use globeshape_core::{
    great_circle_distance, great_circle_location, GeoError, Globe, Location, Position,
};
use serde::{Deserialize, Serialize};

use super::{projected_drag, EditableGeometry};
use crate::control_points::{ControlPoint, ControlPointLayout, ControlPointPurpose};
use crate::reshape::{Rejection, ReshapeContext, ReshapeOutcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCircle {
    pub center: Location,
    /// Radius in meters
    pub radius: f64,
}

impl GeoCircle {
    pub fn new(center: Location, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl EditableGeometry for GeoCircle {
    fn control_points(&self, globe: &dyn Globe, _heading: f64) -> ControlPointLayout {
        let distance = self.radius / globe.equatorial_radius();
        let handle = great_circle_location(&self.center, 90.0, distance);

        ControlPointLayout {
            points: vec![
                ControlPoint::new(handle.into(), ControlPointPurpose::Width, 0)
                    .with_size(self.radius),
            ],
            orientation_line: None,
        }
    }

    fn reshape(&mut self, ctx: &mut ReshapeContext<'_>) -> Result<ReshapeOutcome, GeoError> {
        if ctx.control_point.purpose != ControlPointPurpose::Width {
            return Ok(ReshapeOutcome::Ignored);
        }
        let Some(change) = projected_drag(ctx, &self.center) else {
            return Ok(ReshapeOutcome::Ignored);
        };

        let radius = self.radius + change;
        if radius <= 0.0 {
            return Ok(ReshapeOutcome::Rejected(Rejection::NonPositiveSize {
                attempted: radius,
            }));
        }
        self.radius = radius;
        Ok(ReshapeOutcome::Applied)
    }

    fn reference_position(&self) -> Option<Position> {
        Some(self.center.into())
    }

    fn move_to(&mut self, _globe: &dyn Globe, location: &Location) -> Result<(), GeoError> {
        self.center = *location;
        Ok(())
    }

    fn contains_location(&self, globe: &dyn Globe, location: &Location, _tolerance: f64) -> bool {
        great_circle_distance(&self.center, location) * globe.equatorial_radius() <= self.radius
    }

    fn center(&self) -> Option<Location> {
        Some(self.center)
    }
}
