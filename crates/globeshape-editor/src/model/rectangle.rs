use globeshape_core::{great_circle_location, GeoError, Globe, Location, Position};
use serde::{Deserialize, Serialize};

use super::{local_offsets, projected_drag, rotated_heading, EditableGeometry};
use crate::control_points::{ControlPoint, ControlPointLayout, ControlPointPurpose};
use crate::reshape::{Rejection, ReshapeContext, ReshapeOutcome};

/// Distance of the rotation handle from the center, relative to the height.
const ROTATION_HANDLE_SCALE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRectangle {
    pub center: Location,
    /// Width across the heading, in meters
    pub width: f64,
    /// Height along the heading, in meters
    pub height: f64,
    /// Degrees clockwise from north
    #[serde(default)]
    pub heading: f64,
}

impl GeoRectangle {
    pub fn new(center: Location, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
            heading: 0.0,
        }
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }
}

impl EditableGeometry for GeoRectangle {
    fn control_points(&self, globe: &dyn Globe, _heading: f64) -> ControlPointLayout {
        let radius = globe.equatorial_radius();
        let width = great_circle_location(
            &self.center,
            90.0 + self.heading,
            0.5 * self.width / radius,
        );
        let height = great_circle_location(&self.center, self.heading, 0.5 * self.height / radius);
        let rotation = Position::from(great_circle_location(
            &self.center,
            self.heading,
            ROTATION_HANDLE_SCALE * self.height / radius,
        ));

        ControlPointLayout {
            points: vec![
                ControlPoint::new(width.into(), ControlPointPurpose::Width, 0)
                    .with_size(self.width),
                ControlPoint::new(height.into(), ControlPointPurpose::Height, 1)
                    .with_size(self.height),
                ControlPoint::new(rotation, ControlPointPurpose::Rotation, 2)
                    .with_rotation(self.heading),
            ],
            orientation_line: Some((self.center.into(), rotation)),
        }
    }

    fn reshape(&mut self, ctx: &mut ReshapeContext<'_>) -> Result<ReshapeOutcome, GeoError> {
        let dimension = match ctx.control_point.purpose {
            ControlPointPurpose::Width => &mut self.width,
            ControlPointPurpose::Height => &mut self.height,
            ControlPointPurpose::Rotation => {
                self.heading = rotated_heading(ctx, &self.center, self.heading);
                return Ok(ReshapeOutcome::Applied);
            }
            _ => return Ok(ReshapeOutcome::Ignored),
        };

        let Some(change) = projected_drag(ctx, &self.center) else {
            return Ok(ReshapeOutcome::Ignored);
        };
        // The handle sits at half the extent, so the extent moves twice as far.
        let resized = *dimension + 2.0 * change;
        if resized <= 0.0 {
            return Ok(ReshapeOutcome::Rejected(Rejection::NonPositiveSize {
                attempted: resized,
            }));
        }
        *dimension = resized;
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
        let (across, along) = local_offsets(globe, &self.center, self.heading, location);
        across.abs() <= 0.5 * self.width && along.abs() <= 0.5 * self.height
    }

    fn center(&self) -> Option<Location> {
        Some(self.center)
    }
}
