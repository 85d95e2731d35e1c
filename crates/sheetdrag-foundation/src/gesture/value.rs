use sheetdrag_ui_graphics::{Point, Size};

use crate::scroll_container::ScrollContainerHandle;

/// What the drag reports to `on_change` / `on_end`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragValue {
    /// Movement the drag has claimed so far. Only increments the gesture
    /// owned are included; movement handed to the scroll content is not.
    pub translation: Size,
    /// Pointer location in the gesture's coordinate space.
    pub location: Point,
    /// Pointer velocity in logical pixels per second. In the final value an
    /// axis the drag never claimed reads zero.
    pub velocity: Size,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed
        )
    }
}

/// One recognizer action, as consumed by [`super::GestureArbiter`].
#[derive(Clone, Debug)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    /// Cumulative pointer translation since touch-down.
    pub translation: Point,
    /// Scroll container found under the touch, if any.
    pub container: Option<ScrollContainerHandle>,
}

impl GestureEvent {
    pub fn new(phase: GesturePhase, translation: Point) -> Self {
        Self {
            phase,
            translation,
            container: None,
        }
    }

    pub fn with_container(mut self, container: ScrollContainerHandle) -> Self {
        self.container = Some(container);
        self
    }
}
