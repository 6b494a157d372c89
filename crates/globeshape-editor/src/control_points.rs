//! Control points and the index-stable arena that holds them.
//!
//! A shape produces a fresh [`ControlPointLayout`] every time its geometry
//! changes. [`ControlPointSet::sync`] folds that layout into the arena,
//! keeping indices stable while the sequence of keys stays the same so the
//! render layer can update markers in place.

use globeshape_core::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What dragging a control point edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ControlPointPurpose {
    /// A vertex of a polygon or polyline
    Location,
    /// The shape's heading
    Rotation,
    /// Width, radius or major radius
    Width,
    /// Height or minor radius
    Height,
    /// Anchor for the floating annotation; never draggable
    Annotation,
}

impl fmt::Display for ControlPointPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Location => write!(f, "LOCATION"),
            Self::Rotation => write!(f, "ROTATION"),
            Self::Width => write!(f, "WIDTH"),
            Self::Height => write!(f, "HEIGHT"),
            Self::Annotation => write!(f, "ANNOTATION"),
        }
    }
}

/// Identity of a control point across synchronisations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlPointKey {
    pub purpose: ControlPointPurpose,
    pub id: usize,
}

impl ControlPointKey {
    pub fn new(purpose: ControlPointPurpose, id: usize) -> Self {
        Self { purpose, id }
    }
}

impl fmt::Display for ControlPointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.purpose, self.id)
    }
}

/// A draggable marker for one editable degree of freedom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: Position,
    pub purpose: ControlPointPurpose,
    pub id: usize,
    pub is_control_point: bool,
    /// Length shown in the annotation for size handles, in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Angle shown in the annotation for rotation handles, in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl ControlPoint {
    pub fn new(position: Position, purpose: ControlPointPurpose, id: usize) -> Self {
        Self {
            position,
            purpose,
            id,
            is_control_point: true,
            size: None,
            rotation: None,
        }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn key(&self) -> ControlPointKey {
        ControlPointKey::new(self.purpose, self.id)
    }
}

/// Everything the editor draws for a shape's current geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointLayout {
    pub points: Vec<ControlPoint>,
    /// Line from the shape's center to its rotation handle
    pub orientation_line: Option<(Position, Position)>,
}

impl ControlPointLayout {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// How [`ControlPointSet::sync`] applied a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The key sequence changed and the arena was replaced
    Rebuilt,
    /// Existing control points were updated in place
    Repositioned,
}

/// Index-stable arena of control points.
#[derive(Debug, Clone, Default)]
pub struct ControlPointSet {
    points: Vec<ControlPoint>,
}

impl ControlPointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a freshly computed list of control points into the arena.
    pub fn sync(&mut self, points: Vec<ControlPoint>) -> SyncOutcome {
        let same_keys = self.points.len() == points.len()
            && self
                .points
                .iter()
                .zip(&points)
                .all(|(current, next)| current.key() == next.key());

        if !same_keys {
            self.points = points;
            return SyncOutcome::Rebuilt;
        }

        for (current, next) in self.points.iter_mut().zip(points) {
            current.position = next.position;
            current.size = next.size;
            current.rotation = next.rotation;
        }
        SyncOutcome::Repositioned
    }

    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Arena index of the control point with `key`.
    pub fn index_of(&self, key: ControlPointKey) -> Option<usize> {
        self.points.iter().position(|cp| cp.key() == key)
    }

    pub fn find(&self, key: ControlPointKey) -> Option<&ControlPoint> {
        self.index_of(key).and_then(|index| self.points.get(index))
    }

    pub fn contains(&self, key: ControlPointKey) -> bool {
        self.index_of(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
