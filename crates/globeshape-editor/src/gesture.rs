//! Pointer gesture state machine.
//!
//! [`transition`] is the only place drag state changes. It is pure: the
//! editor feeds it the picked target on pointer-down and acts on the
//! [`Gesture`] it returns.

use globeshape_settings::{GestureSettings, Modifier};
use serde::{Deserialize, Serialize};

use crate::control_points::{ControlPointKey, ControlPointPurpose};
use crate::view::ScreenPoint;

/// Kind of a pointer event, accepting DOM event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    #[serde(alias = "pointerdown", alias = "mousedown")]
    Down,
    #[serde(alias = "pointermove", alias = "mousemove")]
    Move,
    #[serde(alias = "pointerup", alias = "mouseup")]
    Up,
    #[serde(other)]
    Unknown,
}

/// A pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    #[serde(rename = "type", alias = "kind")]
    pub kind: PointerEventKind,
    pub client_x: f64,
    pub client_y: f64,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub alt_key: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, client_x: f64, client_y: f64) -> Self {
        Self {
            kind,
            client_x,
            client_y,
            shift_key: false,
            alt_key: false,
        }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn at(&self) -> ScreenPoint {
        ScreenPoint::new(self.client_x, self.client_y)
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift: self.shift_key,
            alt: self.alt_key,
        }
    }
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn holds(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Shift => self.shift,
            Modifier::Alt => self.alt,
        }
    }
}

/// What a drag acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// The shape as a whole
    Body,
    ControlPoint(ControlPointKey),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub target: DragTarget,
    pub start: ScreenPoint,
    pub last: ScreenPoint,
    /// Set once the pointer has left `start`
    pub moved: bool,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging(_))
    }

    pub fn target(&self) -> Option<DragTarget> {
        match self {
            GestureState::Dragging(session) => Some(session.target),
            GestureState::Idle => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    /// `hit` is what the pointer landed on, if it is editable
    Down {
        at: ScreenPoint,
        modifiers: Modifiers,
        hit: Option<DragTarget>,
    },
    Move {
        at: ScreenPoint,
    },
    Up {
        at: ScreenPoint,
        modifiers: Modifiers,
    },
}

/// A click completed without pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickGesture {
    InsertVertex,
    DeleteVertex(ControlPointKey),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Ignored,
    /// `interrupted` is set when a previous drag never saw its pointer-up
    BeginDrag {
        target: DragTarget,
        interrupted: bool,
    },
    Drag {
        target: DragTarget,
        from: ScreenPoint,
        to: ScreenPoint,
    },
    EndDrag {
        target: DragTarget,
        click: Option<ClickGesture>,
    },
}

fn click_for(
    session: &DragSession,
    at: ScreenPoint,
    modifiers: Modifiers,
    bindings: &GestureSettings,
) -> Option<ClickGesture> {
    if session.moved || at != session.start {
        return None;
    }

    match session.target {
        DragTarget::Body if modifiers.holds(bindings.insert_vertex) => {
            Some(ClickGesture::InsertVertex)
        }
        DragTarget::ControlPoint(key)
            if key.purpose == ControlPointPurpose::Location
                && modifiers.holds(bindings.delete_vertex) =>
        {
            Some(ClickGesture::DeleteVertex(key))
        }
        _ => None,
    }
}

/// Advance the gesture state by one input.
pub fn transition(
    state: GestureState,
    input: GestureInput,
    bindings: &GestureSettings,
) -> (GestureState, Gesture) {
    match (state, input) {
        (state, GestureInput::Down { at, modifiers, hit }) => {
            let interrupted = state.is_dragging();
            match hit {
                Some(target) => (
                    GestureState::Dragging(DragSession {
                        target,
                        start: at,
                        last: at,
                        moved: false,
                        modifiers,
                    }),
                    Gesture::BeginDrag {
                        target,
                        interrupted,
                    },
                ),
                None => match state {
                    GestureState::Dragging(session) => (
                        GestureState::Idle,
                        Gesture::EndDrag {
                            target: session.target,
                            click: None,
                        },
                    ),
                    GestureState::Idle => (GestureState::Idle, Gesture::Ignored),
                },
            }
        }
        (GestureState::Dragging(mut session), GestureInput::Move { at }) => {
            let from = session.last;
            session.last = at;
            session.moved |= at != session.start;
            (
                GestureState::Dragging(session),
                Gesture::Drag {
                    target: session.target,
                    from,
                    to: at,
                },
            )
        }
        (GestureState::Dragging(session), GestureInput::Up { at, modifiers }) => (
            GestureState::Idle,
            Gesture::EndDrag {
                target: session.target,
                click: click_for(&session, at, modifiers, bindings),
            },
        ),
        (GestureState::Idle, GestureInput::Move { .. } | GestureInput::Up { .. }) => {
            (GestureState::Idle, Gesture::Ignored)
        }
    }
}
