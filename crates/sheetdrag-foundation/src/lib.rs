//! Foundation for sheetdrag: a drag gesture that interoperates with nested
//! scroll containers.
//!
//! A bottom sheet or pull-to-dismiss card usually hosts scrollable content.
//! [`InteroperableDragGesture`] decides, one movement increment at a time,
//! whether the finger drives the sheet or the content, locking the
//! container's native scrolling on the axes the drag has claimed.

pub mod axis;
pub mod coordinate_space;
pub mod edges;
pub mod gesture;
pub mod gesture_constants;
pub mod input;
pub mod pan_direction;
pub mod scroll_container;
pub mod scroll_controller;
pub mod velocity_tracker;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use axis::{Axes, Axis};
pub use coordinate_space::{
    CoordinateSpace, CoordinateSpaceConverter, CoordinateSpaces, PointerSnapshot,
};
pub use edges::{Edge, EdgeSet};
pub use gesture::{
    Configuration, DragValue, GestureArbiter, GestureEvent, GesturePhase,
    InteroperableDragGesture, ScrollLock, Tracking,
};
pub use input::{
    ContainerSelection, PointerEvent, PointerEventKind, PointerId, RecognizerInfo,
    RecognizerKind, RecognizerState, ViewHierarchy,
};
pub use pan_direction::{PanDirection, PanDirectionDetector};
pub use scroll_container::{ScrollContainer, ScrollContainerHandle, ViewId};
pub use scroll_controller::ScrollController;
pub use velocity_tracker::VelocityTracker;

pub mod prelude {
    pub use crate::axis::{Axes, Axis};
    pub use crate::coordinate_space::{CoordinateSpace, CoordinateSpaceConverter, CoordinateSpaces};
    pub use crate::edges::{Edge, EdgeSet};
    pub use crate::gesture::{
        Configuration, DragValue, GestureEvent, GesturePhase, InteroperableDragGesture, ScrollLock,
    };
    pub use crate::input::{
        ContainerSelection, PointerEvent, RecognizerInfo, RecognizerKind, ViewHierarchy,
    };
    pub use crate::scroll_container::{ScrollContainer, ScrollContainerHandle, ViewId};
    pub use sheetdrag_ui_graphics::prelude::*;
}
