//! Pointer events delivered to widgets by the host
//!
//! Hosts translate their native touch or mouse input into [`Event`]s and
//! hand them to widgets through `handle_event`.

use crate::geometry::Point;

/// Kind of pointer interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerUp,
    PointerMove,
    PointerEnter,
    PointerLeave,
    /// The host took the touch away (scroll began, system gesture, ...)
    PointerCancel,
}

/// A pointer event in the receiving widget's own coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub position: Point,
    /// Host timestamp in milliseconds
    pub timestamp: u64,
}

impl Event {
    pub fn new(kind: EventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            timestamp: 0,
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}
