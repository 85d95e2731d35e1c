//! The public drag gesture: recognizer shell plus edge arbitration.

use crate::coordinate_space::{CoordinateSpace, CoordinateSpaces, PointerSnapshot};
use crate::input::{
    should_recognize_simultaneously, DragGestureRecognizer, PointerEvent, RecognizerInfo,
    RecognizerKind, RecognizerState, ViewHierarchy,
};
use crate::scroll_container::ViewId;

use super::arbitration::{GestureArbiter, Tracking};
use super::configuration::{Configuration, ScrollLock};
use super::value::{DragValue, GestureEvent};

/// A drag that cooperates with the scroll container under the touch.
///
/// Hosts forward raw pointer events through
/// [`handle_pointer_event`](Self::handle_pointer_event) and consult
/// [`should_recognize_simultaneously`](Self::should_recognize_simultaneously)
/// when their own recognizers compete for the same touch.
///
/// ```
/// use sheetdrag_foundation::prelude::*;
///
/// let gesture = InteroperableDragGesture::new(
///     Configuration::default().with_target_edges(EdgeSet::TOP),
///     ScrollLock::default(),
///     CoordinateSpace::Global,
///     |value| println!("sheet offset {:?}", value.translation),
///     |value| println!("released at {:?}", value.velocity),
/// );
/// assert!(!gesture.is_active());
/// ```
pub struct InteroperableDragGesture {
    recognizer: DragGestureRecognizer,
    arbiter: GestureArbiter,
    coordinate_spaces: CoordinateSpaces,
}

impl InteroperableDragGesture {
    pub fn new(
        configuration: Configuration,
        scroll_lock: ScrollLock,
        coordinate_space: CoordinateSpace,
        on_change: impl FnMut(DragValue) + 'static,
        on_end: impl FnMut(DragValue) + 'static,
    ) -> Self {
        Self {
            recognizer: DragGestureRecognizer::new(),
            arbiter: GestureArbiter::new(
                configuration,
                scroll_lock,
                coordinate_space,
                on_change,
                on_end,
            ),
            coordinate_spaces: CoordinateSpaces::new(),
        }
    }

    /// Replaces the registry used to resolve named coordinate spaces.
    pub fn with_coordinate_spaces(mut self, coordinate_spaces: CoordinateSpaces) -> Self {
        self.coordinate_spaces = coordinate_spaces;
        self
    }

    /// Overrides the drag slop of the underlying recognizer.
    pub fn with_slop(mut self, slop: f32) -> Self {
        self.recognizer = self.recognizer.with_slop(slop);
        self
    }

    pub fn coordinate_spaces_mut(&mut self) -> &mut CoordinateSpaces {
        &mut self.coordinate_spaces
    }

    pub fn configuration(&self) -> &Configuration {
        self.arbiter.configuration()
    }

    pub fn recognizer_state(&self) -> RecognizerState {
        self.recognizer.state()
    }

    /// Container tracked for the current touch, if one qualified.
    pub fn tracked_container(&self) -> Option<ViewId> {
        self.recognizer.tracking_container().map(|handle| handle.id())
    }

    pub fn tracking(&self) -> Option<&Tracking> {
        self.arbiter.tracking()
    }

    /// Whether a drag has begun and not yet ended.
    pub fn is_active(&self) -> bool {
        self.arbiter.is_active()
    }

    pub fn handle_pointer_event(&mut self, event: &PointerEvent, hierarchy: &dyn ViewHierarchy) {
        let phase = match self.recognizer.process(
            event,
            hierarchy,
            self.arbiter.configuration().container_selection,
        ) {
            Ok(Some(phase)) => phase,
            Ok(None) => return,
            Err(err) => {
                log::warn!("dropping pointer event {:?}: {err}", event.kind);
                debug_assert!(false, "out-of-order pointer event: {err}");
                return;
            }
        };

        let mut gesture_event = GestureEvent::new(phase, self.recognizer.translation());
        gesture_event.container = self.recognizer.tracking_container().cloned();

        let snapshot = PointerSnapshot {
            position: self.recognizer.position(),
            velocity: Some(self.recognizer.velocity()),
            spaces: &self.coordinate_spaces,
        };
        self.arbiter.handle(&gesture_event, &snapshot);
    }

    /// Whether `other` may recognize together with this drag.
    pub fn should_recognize_simultaneously(&self, other: &RecognizerInfo) -> bool {
        should_recognize_simultaneously(
            &RecognizerInfo::new(RecognizerKind::InteroperableDrag),
            other,
            self.arbiter.configuration(),
            self.tracked_container(),
        )
    }
}
