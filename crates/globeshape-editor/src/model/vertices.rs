//! Vertex operations shared by polygons and polylines.
//!
//! Both shapes are handled as a list of rings; a polyline is a single open
//! ring. Vertices are addressed by their flattened index: the position in
//! ring traversal order, outer ring first.

use globeshape_core::{
    average_distance, centroid, great_circle_azimuth, great_circle_location,
    nearest_point_on_segment, normalized_heading, rotate_locations, GeoError, Globe, Location,
    Position, Vec3,
};

use crate::control_points::{ControlPoint, ControlPointLayout, ControlPointPurpose};
use crate::reshape::{ReshapeContext, ReshapeOutcome, Rejection};

/// Distance of the rotation handle from the centroid, relative to the mean vertex distance.
const ROTATION_HANDLE_SCALE: f64 = 1.2;

pub(crate) fn flatten(rings: &[Vec<Position>]) -> Vec<Position> {
    rings.iter().flatten().copied().collect()
}

/// Ring and in-ring index of the vertex at flattened index `id`.
pub(crate) fn locate(rings: &[Vec<Position>], id: usize) -> Option<(usize, usize)> {
    let mut offset = 0;
    for (ring_index, ring) in rings.iter().enumerate() {
        if id < offset + ring.len() {
            return Some((ring_index, id - offset));
        }
        offset += ring.len();
    }
    None
}

/// One LOCATION point per vertex plus a ROTATION handle beyond the centroid.
pub(crate) fn layout(
    globe: &dyn Globe,
    rings: &[Vec<Position>],
    heading: f64,
) -> ControlPointLayout {
    let locations = flatten(rings);
    if locations.len() < 2 {
        return ControlPointLayout::empty();
    }

    let mut points: Vec<ControlPoint> = locations
        .iter()
        .enumerate()
        .map(|(id, position)| ControlPoint::new(*position, ControlPointPurpose::Location, id))
        .collect();

    let Ok(center) = centroid(globe, &locations) else {
        return ControlPointLayout {
            points,
            orientation_line: None,
        };
    };
    let center = center.clamped_to_surface();
    let radius = average_distance(globe, &center.location(), &locations) * ROTATION_HANDLE_SCALE;
    let handle = Position::from(great_circle_location(&center.location(), heading, radius));

    points.push(
        ControlPoint::new(handle, ControlPointPurpose::Rotation, locations.len())
            .with_rotation(heading),
    );

    ControlPointLayout {
        points,
        orientation_line: Some((center, handle)),
    }
}

/// Reshape rule for vertex shapes.
pub(crate) fn reshape(
    rings: &mut [Vec<Position>],
    ctx: &mut ReshapeContext<'_>,
) -> Result<ReshapeOutcome, GeoError> {
    match ctx.control_point.purpose {
        ControlPointPurpose::Location => move_vertex(rings, ctx),
        ControlPointPurpose::Rotation => rotate(rings, ctx),
        _ => Ok(ReshapeOutcome::Ignored),
    }
}

fn move_vertex(
    rings: &mut [Vec<Position>],
    ctx: &ReshapeContext<'_>,
) -> Result<ReshapeOutcome, GeoError> {
    let id = ctx.control_point.id;
    let Some((ring, index)) = locate(rings, id) else {
        return Ok(ReshapeOutcome::Rejected(Rejection::UnknownVertex { id }));
    };

    let vertex = &mut rings[ring][index];
    let point = ctx.globe.position_to_point(vertex) + ctx.delta();
    *vertex = ctx.globe.point_to_position(&point)?.clamped_to_surface();
    Ok(ReshapeOutcome::Applied)
}

fn rotate(
    rings: &mut [Vec<Position>],
    ctx: &mut ReshapeContext<'_>,
) -> Result<ReshapeOutcome, GeoError> {
    let center = match centroid(ctx.globe, &flatten(rings)) {
        Ok(center) => center.location(),
        Err(GeoError::EmptyGeometry { .. }) => return Ok(ReshapeOutcome::Ignored),
        Err(err) => return Err(err),
    };

    let delta = great_circle_azimuth(&center, &ctx.current.location())
        - great_circle_azimuth(&center, &ctx.previous.location());
    *ctx.heading = normalized_heading(*ctx.heading, delta);

    for ring in rings.iter_mut() {
        rotate_locations(&center, delta, ring);
    }
    Ok(ReshapeOutcome::Applied)
}

/// Remove the vertex at flattened index `id` if its ring stays above `minimum`.
pub(crate) fn delete(rings: &mut [Vec<Position>], id: usize, minimum: usize) -> ReshapeOutcome {
    let Some((ring, index)) = locate(rings, id) else {
        return ReshapeOutcome::Rejected(Rejection::UnknownVertex { id });
    };

    if rings[ring].len() <= minimum {
        return ReshapeOutcome::Rejected(Rejection::MinimumVertexCount { minimum });
    }

    rings[ring].remove(index);
    ReshapeOutcome::Applied
}

struct Candidate {
    ring: usize,
    /// Index the new vertex takes inside its ring
    insert_at: usize,
    point: Vec3,
    distance: f64,
}

/// Insert a vertex on the edge nearest to `pick`.
///
/// Every edge of every ring is considered; the closing edge only when `closed`.
pub(crate) fn insert_near(
    globe: &dyn Globe,
    rings: &mut [Vec<Position>],
    closed: bool,
    pick: &Position,
) -> Result<Option<usize>, GeoError> {
    let pick_point = globe.location_to_point(&pick.location());
    let mut best: Option<Candidate> = None;

    for (ring_index, ring) in rings.iter().enumerate() {
        let points: Vec<Vec3> = ring
            .iter()
            .map(|p| globe.location_to_point(&p.location()))
            .collect();
        let count = points.len();
        if count < 2 {
            continue;
        }

        let edges = if closed { count } else { count - 1 };
        for i in 0..edges {
            let j = (i + 1) % count;
            let nearest = nearest_point_on_segment(&points[i], &points[j], &pick_point);
            let distance = (nearest - pick_point).norm();

            if best.as_ref().map_or(true, |b| distance < b.distance) {
                best = Some(Candidate {
                    ring: ring_index,
                    // The closing edge appends after the last vertex.
                    insert_at: if j == 0 { count } else { i + 1 },
                    point: nearest,
                    distance,
                });
            }
        }
    }

    let Some(best) = best else {
        return Ok(None);
    };

    let position = globe.point_to_position(&best.point)?.clamped_to_surface();
    rings[best.ring].insert(best.insert_at, position);

    let offset: usize = rings[..best.ring].iter().map(Vec::len).sum();
    Ok(Some(offset + best.insert_at))
}

/// Translate every vertex by the Cartesian displacement that carries `reference` onto `target`.
pub(crate) fn translate(
    globe: &dyn Globe,
    rings: &mut [Vec<Position>],
    reference: &Position,
    target: &Location,
) -> Result<(), GeoError> {
    let delta = globe.location_to_point(target) - globe.location_to_point(&reference.location());

    for ring in rings.iter_mut() {
        for vertex in ring.iter_mut() {
            let point = globe.position_to_point(vertex) + delta;
            *vertex = globe.point_to_position(&point)?.clamped_to_surface();
        }
    }
    Ok(())
}
