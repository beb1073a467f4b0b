//! Base widget trait and types

use std::sync::atomic::{AtomicU64, Ordering};

use matter_core::{Event, Rect};

/// Process-unique widget identifier
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Frame in the parent's coordinates
    fn frame(&self) -> Rect;

    /// Handle a pointer event in the widget's own coordinates.
    ///
    /// Returns true when the event was consumed.
    fn handle_event(&mut self, event: &Event) -> bool;
}
