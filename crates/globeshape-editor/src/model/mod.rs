use globeshape_core::{
    great_circle_azimuth, great_circle_distance, Color, GeoError, Globe, Location, Position,
};
use serde::{Deserialize, Serialize};

use crate::control_points::ControlPointLayout;
use crate::reshape::{ReshapeContext, ReshapeOutcome};

mod circle;
mod ellipse;
mod polygon;
mod polyline;
mod rectangle;
mod vertices;

pub use circle::GeoCircle;
pub use ellipse::GeoEllipse;
pub use polygon::{GeoPolygon, MIN_POLYGON_VERTICES};
pub use polyline::{GeoPolyline, MIN_POLYLINE_VERTICES};
pub use rectangle::GeoRectangle;

/// Editing capabilities every surface shape provides.
pub trait EditableGeometry {
    /// Control points for the current geometry.
    ///
    /// `heading` is the editor's accumulator, used by shapes without a heading of their own.
    fn control_points(&self, globe: &dyn Globe, heading: f64) -> ControlPointLayout;

    /// Apply one drag step of a control point.
    fn reshape(&mut self, ctx: &mut ReshapeContext<'_>) -> Result<ReshapeOutcome, GeoError>;

    /// Anchor used to translate the whole shape.
    fn reference_position(&self) -> Option<Position>;

    /// Translate the whole shape so its reference position lands on `location`.
    fn move_to(&mut self, globe: &dyn Globe, location: &Location) -> Result<(), GeoError>;

    /// Whether `location` falls on the shape's body.
    ///
    /// `tolerance` is in meters and only matters for line-like shapes.
    fn contains_location(&self, globe: &dyn Globe, location: &Location, tolerance: f64) -> bool;

    /// Inherent center, for shapes that have one.
    fn center(&self) -> Option<Location>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Polygon,
    Polyline,
    Circle,
    Rectangle,
    Ellipse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Polygon(GeoPolygon),
    Polyline(GeoPolyline),
    Circle(GeoCircle),
    Rectangle(GeoRectangle),
    Ellipse(GeoEllipse),
}

impl EditableGeometry for Shape {
    fn control_points(&self, globe: &dyn Globe, heading: f64) -> ControlPointLayout {
        match self {
            Shape::Polygon(s) => s.control_points(globe, heading),
            Shape::Polyline(s) => s.control_points(globe, heading),
            Shape::Circle(s) => s.control_points(globe, heading),
            Shape::Rectangle(s) => s.control_points(globe, heading),
            Shape::Ellipse(s) => s.control_points(globe, heading),
        }
    }

    fn reshape(&mut self, ctx: &mut ReshapeContext<'_>) -> Result<ReshapeOutcome, GeoError> {
        match self {
            Shape::Polygon(s) => s.reshape(ctx),
            Shape::Polyline(s) => s.reshape(ctx),
            Shape::Circle(s) => s.reshape(ctx),
            Shape::Rectangle(s) => s.reshape(ctx),
            Shape::Ellipse(s) => s.reshape(ctx),
        }
    }

    fn reference_position(&self) -> Option<Position> {
        match self {
            Shape::Polygon(s) => s.reference_position(),
            Shape::Polyline(s) => s.reference_position(),
            Shape::Circle(s) => s.reference_position(),
            Shape::Rectangle(s) => s.reference_position(),
            Shape::Ellipse(s) => s.reference_position(),
        }
    }

    fn move_to(&mut self, globe: &dyn Globe, location: &Location) -> Result<(), GeoError> {
        match self {
            Shape::Polygon(s) => s.move_to(globe, location),
            Shape::Polyline(s) => s.move_to(globe, location),
            Shape::Circle(s) => s.move_to(globe, location),
            Shape::Rectangle(s) => s.move_to(globe, location),
            Shape::Ellipse(s) => s.move_to(globe, location),
        }
    }

    fn contains_location(&self, globe: &dyn Globe, location: &Location, tolerance: f64) -> bool {
        match self {
            Shape::Polygon(s) => s.contains_location(globe, location, tolerance),
            Shape::Polyline(s) => s.contains_location(globe, location, tolerance),
            Shape::Circle(s) => s.contains_location(globe, location, tolerance),
            Shape::Rectangle(s) => s.contains_location(globe, location, tolerance),
            Shape::Ellipse(s) => s.contains_location(globe, location, tolerance),
        }
    }

    fn center(&self) -> Option<Location> {
        match self {
            Shape::Polygon(s) => s.center(),
            Shape::Polyline(s) => s.center(),
            Shape::Circle(s) => s.center(),
            Shape::Rectangle(s) => s.center(),
            Shape::Ellipse(s) => s.center(),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Polyline(_) => ShapeType::Polyline,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
        }
    }

    /// Remove the vertex at flattened index `id`.
    ///
    /// Only polygons and polylines have vertices; other shapes ignore the request.
    pub fn delete_vertex(&mut self, id: usize) -> ReshapeOutcome {
        match self {
            Shape::Polygon(s) => s.delete_vertex(id),
            Shape::Polyline(s) => s.delete_vertex(id),
            _ => ReshapeOutcome::Ignored,
        }
    }

    /// Insert a vertex on the edge nearest to `pick`.
    ///
    /// Returns the flattened index of the new vertex, or `None` when the shape
    /// has no edges.
    pub fn insert_vertex_near(
        &mut self,
        globe: &dyn Globe,
        pick: &Position,
    ) -> Result<Option<usize>, GeoError> {
        match self {
            Shape::Polygon(s) => s.insert_vertex_near(globe, pick),
            Shape::Polyline(s) => s.insert_vertex_near(globe, pick),
            _ => Ok(None),
        }
    }

    /// Total number of vertices across all rings.
    pub fn vertex_count(&self) -> usize {
        match self {
            Shape::Polygon(s) => s.vertex_count(),
            Shape::Polyline(s) => s.vertices.len(),
            _ => 0,
        }
    }
}

/// Interior and outline styling of a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeAttributes {
    pub interior_color: Color,
    pub outline_color: Color,
    pub outline_width: f64,
}

impl Default for ShapeAttributes {
    fn default() -> Self {
        Self {
            interior_color: Color::WHITE,
            outline_color: Color::BLACK,
            outline_width: 1.0,
        }
    }
}

/// A shape together with its host identity and styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableShape {
    pub id: u64,
    pub shape: Shape,
    #[serde(default)]
    pub attributes: ShapeAttributes,
    #[serde(default)]
    pub highlight_attributes: ShapeAttributes,
}

impl EditableShape {
    pub fn new(id: u64, shape: Shape) -> Self {
        Self {
            id,
            shape,
            attributes: ShapeAttributes::default(),
            highlight_attributes: ShapeAttributes::default(),
        }
    }
}

/// Offsets of `location` from `center` in the frame of a shape rotated by `heading`.
///
/// Returns `(across, along)` in meters: `along` points at `heading`, `across`
/// at `heading + 90`.
pub(crate) fn local_offsets(
    globe: &dyn Globe,
    center: &Location,
    heading: f64,
    location: &Location,
) -> (f64, f64) {
    let distance = great_circle_distance(center, location) * globe.equatorial_radius();
    let azimuth = (great_circle_azimuth(center, location) - heading).to_radians();
    (distance * azimuth.sin(), distance * azimuth.cos())
}

/// Project `ctx.delta()` onto the direction from `center` to the dragged control point.
///
/// Returns `None` when the control point sits on the center.
pub(crate) fn projected_drag(ctx: &ReshapeContext<'_>, center: &Location) -> Option<f64> {
    let center_point = ctx.globe.location_to_point(center);
    let marker_point = ctx.globe.position_to_point(&ctx.control_point.position);
    let axis = marker_point - center_point;
    let length = axis.norm();
    if length == 0.0 {
        return None;
    }
    Some(ctx.delta().dot(&(axis / length)))
}

/// Rotate a heading by the change in azimuth of the pointer seen from `center`.
pub(crate) fn rotated_heading(ctx: &ReshapeContext<'_>, center: &Location, heading: f64) -> f64 {
    let previous = great_circle_azimuth(center, &ctx.previous.location());
    let current = great_circle_azimuth(center, &ctx.current.location());
    globeshape_core::normalized_heading(heading, current - previous)
}
