use globeshape_core::{great_circle_location, GeoError, Globe, Location, Position};
use serde::{Deserialize, Serialize};

use super::{local_offsets, projected_drag, rotated_heading, EditableGeometry};
use crate::control_points::{ControlPoint, ControlPointLayout, ControlPointPurpose};
use crate::reshape::{Rejection, ReshapeContext, ReshapeOutcome};

/// Distance of the rotation handle from the center, relative to the minor radius.
const ROTATION_HANDLE_SCALE: f64 = 1.15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoEllipse {
    pub center: Location,
    /// Semi-axis across the heading, in meters
    pub major_radius: f64,
    /// Semi-axis along the heading, in meters
    pub minor_radius: f64,
    /// Degrees clockwise from north
    #[serde(default)]
    pub heading: f64,
}

impl GeoEllipse {
    pub fn new(center: Location, major_radius: f64, minor_radius: f64) -> Self {
        Self {
            center,
            major_radius,
            minor_radius,
            heading: 0.0,
        }
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }
}

impl EditableGeometry for GeoEllipse {
    fn control_points(&self, globe: &dyn Globe, _heading: f64) -> ControlPointLayout {
        let radius = globe.equatorial_radius();
        let major = great_circle_location(
            &self.center,
            90.0 + self.heading,
            self.major_radius / radius,
        );
        let minor = great_circle_location(&self.center, self.heading, self.minor_radius / radius);
        let rotation = Position::from(great_circle_location(
            &self.center,
            self.heading,
            ROTATION_HANDLE_SCALE * self.minor_radius / radius,
        ));

        ControlPointLayout {
            points: vec![
                ControlPoint::new(major.into(), ControlPointPurpose::Width, 0)
                    .with_size(self.major_radius),
                ControlPoint::new(minor.into(), ControlPointPurpose::Height, 1)
                    .with_size(self.minor_radius),
                ControlPoint::new(rotation, ControlPointPurpose::Rotation, 2)
                    .with_rotation(self.heading),
            ],
            orientation_line: Some((self.center.into(), rotation)),
        }
    }

    fn reshape(&mut self, ctx: &mut ReshapeContext<'_>) -> Result<ReshapeOutcome, GeoError> {
        let axis = match ctx.control_point.purpose {
            ControlPointPurpose::Width => &mut self.major_radius,
            ControlPointPurpose::Height => &mut self.minor_radius,
            ControlPointPurpose::Rotation => {
                self.heading = rotated_heading(ctx, &self.center, self.heading);
                return Ok(ReshapeOutcome::Applied);
            }
            _ => return Ok(ReshapeOutcome::Ignored),
        };

        let Some(change) = projected_drag(ctx, &self.center) else {
            return Ok(ReshapeOutcome::Ignored);
        };
        let resized = *axis + change;
        if resized <= 0.0 {
            return Ok(ReshapeOutcome::Rejected(Rejection::NonPositiveSize {
                attempted: resized,
            }));
        }
        *axis = resized;
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
        let x = across / self.major_radius;
        let y = along / self.minor_radius;
        x * x + y * y <= 1.0
    }

    fn center(&self) -> Option<Location> {
        Some(self.center)
    }
}
