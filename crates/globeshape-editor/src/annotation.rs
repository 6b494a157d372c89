//! Text shown next to the control point being dragged.

use globeshape_core::{format_latitude, format_length, format_longitude, format_rotation, Location};

use crate::control_points::{ControlPoint, ControlPointPurpose};

/// Label for a control point: its size, its rotation, or else its coordinates.
pub fn annotation_text(control_point: &ControlPoint) -> String {
    if let Some(size) = control_point.size {
        format_length(size)
    } else if let Some(rotation) = control_point.rotation {
        format_rotation(rotation)
    } else {
        format!(
            "{} {}",
            format_latitude(control_point.position.latitude),
            format_longitude(control_point.position.longitude)
        )
    }
}

/// Non-draggable anchor used to label a shape's center while it is moved.
pub fn center_marker(center: Location) -> ControlPoint {
    ControlPoint::new(center.into(), ControlPointPurpose::Annotation, 0)
}
