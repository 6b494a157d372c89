//! Reshape engine: turns successive terrain positions under a dragged
//! control point into geometry edits.
//!
//! The engine only tracks drag bookkeeping (the previous terrain position and
//! the heading accumulator used by shapes without an inherent heading). The
//! per-shape rules live with each shape in [`crate::model`].

use globeshape_core::{compute_control_point_delta, Globe, GeoError, Position, Vec3};

use crate::control_points::ControlPoint;
use crate::model::{EditableGeometry, Shape};

/// Why an edit was refused. The geometry is left untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// A size would have become zero or negative
    NonPositiveSize { attempted: f64 },
    /// Removing a vertex would leave the ring below its minimum
    MinimumVertexCount { minimum: usize },
    /// The vertex index does not exist in the shape
    UnknownVertex { id: usize },
}

/// Result of a single reshape step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReshapeOutcome {
    /// First position of a drag; recorded, nothing changed
    Anchored,
    /// The geometry changed
    Applied,
    /// The edit was refused
    Rejected(Rejection),
    /// The shape has no use for this control point
    Ignored,
}

impl ReshapeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReshapeOutcome::Applied)
    }
}

/// Inputs to one reshape step.
pub struct ReshapeContext<'a> {
    pub globe: &'a dyn Globe,
    pub control_point: &'a ControlPoint,
    pub previous: Position,
    pub current: Position,
    /// Heading accumulator for polygons and polylines
    pub heading: &'a mut f64,
}

impl ReshapeContext<'_> {
    /// Cartesian displacement of the pointer since the previous step.
    pub fn delta(&self) -> Vec3 {
        compute_control_point_delta(self.globe, &self.previous, &self.current)
    }
}

/// Drag bookkeeping shared by every reshape step.
#[derive(Debug, Clone, Default)]
pub struct ReshapeEngine {
    previous_position: Option<Position>,
    current_heading: f64,
}

impl ReshapeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag anchored at `anchor`, or unanchored when the pointer missed the terrain.
    pub fn begin(&mut self, anchor: Option<Position>) {
        self.previous_position = anchor;
    }

    pub fn end(&mut self) {
        self.previous_position = None;
    }

    pub fn reset_heading(&mut self) {
        self.current_heading = 0.0;
    }

    pub fn current_heading(&self) -> f64 {
        self.current_heading
    }

    pub fn previous_position(&self) -> Option<Position> {
        self.previous_position
    }

    /// Apply the move of `control_point` to `terrain` on `shape`.
    ///
    /// The terrain position becomes the previous position whatever the outcome.
    pub fn reshape(
        &mut self,
        globe: &dyn Globe,
        shape: &mut Shape,
        control_point: &ControlPoint,
        terrain: Position,
    ) -> Result<ReshapeOutcome, GeoError> {
        let Some(previous) = self.previous_position.replace(terrain) else {
            return Ok(ReshapeOutcome::Anchored);
        };

        let mut context = ReshapeContext {
            globe,
            control_point,
            previous,
            current: terrain,
            heading: &mut self.current_heading,
        };
        let outcome = shape.reshape(&mut context)?;

        match outcome {
            ReshapeOutcome::Rejected(rejection) => {
                tracing::warn!(
                    "Rejected {} edit of {:?}: {:?}",
                    control_point.key(),
                    shape.shape_type(),
                    rejection
                );
            }
            _ => tracing::debug!(
                "Reshape {} of {:?}: {:?}",
                control_point.key(),
                shape.shape_type(),
                outcome
            ),
        }

        Ok(outcome)
    }
}
