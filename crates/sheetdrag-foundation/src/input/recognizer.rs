//! Pan recognition from raw pointer events.
//!
//! Turns a down/move/up stream into gesture phases: the gesture stays
//! `Possible` until the pointer has travelled past the drag slop, then
//! reports `Began`, `Changed` for every further move, and one terminal
//! phase. At touch-down it also hit-tests for the scroll container the drag
//! will interoperate with.

use sheetdrag_ui_graphics::Point;
use std::fmt;

use super::hit_test::{find_scroll_container, ContainerSelection, ViewHierarchy};
use super::pointer::{PointerEvent, PointerEventKind, PointerId};
use crate::gesture::GesturePhase;
use crate::gesture_constants::DRAG_THRESHOLD;
use crate::scroll_container::ScrollContainerHandle;
use crate::velocity_tracker::VelocityTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RecognizerState {
    #[default]
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl RecognizerState {
    /// `Began` or `Changed`.
    pub fn is_recognized(self) -> bool {
        matches!(self, RecognizerState::Began | RecognizerState::Changed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerError {
    /// An up or cancel arrived while no pointer was down.
    NoActivePointer { kind: PointerEventKind },
    /// The tracked pointer went down twice without lifting.
    DuplicateDown { id: PointerId },
}

impl fmt::Display for RecognizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognizerError::NoActivePointer { kind } => {
                write!(f, "{kind:?} event without an active pointer")
            }
            RecognizerError::DuplicateDown { id } => {
                write!(f, "pointer {id} went down twice")
            }
        }
    }
}

impl std::error::Error for RecognizerError {}

pub struct DragGestureRecognizer {
    state: RecognizerState,
    pointer: Option<PointerId>,
    start_position: Point,
    position: Point,
    tracking_container: Option<ScrollContainerHandle>,
    velocity: VelocityTracker,
    slop: f32,
}

impl Default for DragGestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGestureRecognizer {
    pub fn new() -> Self {
        Self {
            state: RecognizerState::Possible,
            pointer: None,
            start_position: Point::ZERO,
            position: Point::ZERO,
            tracking_container: None,
            velocity: VelocityTracker::new(),
            slop: DRAG_THRESHOLD,
        }
    }

    /// Overrides the distance the pointer must travel before the drag begins.
    pub fn with_slop(mut self, slop: f32) -> Self {
        self.slop = slop.max(0.0);
        self
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    /// Container found under the current touch; cleared when it lifts.
    pub fn tracking_container(&self) -> Option<&ScrollContainerHandle> {
        self.tracking_container.as_ref()
    }

    /// Cumulative translation since touch-down.
    pub fn translation(&self) -> Point {
        self.position - self.start_position
    }

    /// Latest pointer position, global coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Point {
        self.velocity.clamped_velocity()
    }

    /// Feeds one pointer event. Returns the phase to deliver to the gesture,
    /// if the event produced one.
    pub fn process(
        &mut self,
        event: &PointerEvent,
        hierarchy: &dyn ViewHierarchy,
        selection: ContainerSelection,
    ) -> Result<Option<GesturePhase>, RecognizerError> {
        match event.kind {
            PointerEventKind::Down => self.touch_down(event, hierarchy, selection).map(|_| None),
            PointerEventKind::Move | PointerEventKind::Up | PointerEventKind::Cancel => {
                self.track(event)
            }
        }
    }

    /// Forgets the active pointer and returns to `Possible`.
    pub fn reset(&mut self) {
        self.state = RecognizerState::Possible;
        self.pointer = None;
        self.start_position = Point::ZERO;
        self.position = Point::ZERO;
        self.tracking_container = None;
        self.velocity.reset();
    }

    fn touch_down(
        &mut self,
        event: &PointerEvent,
        hierarchy: &dyn ViewHierarchy,
        selection: ContainerSelection,
    ) -> Result<(), RecognizerError> {
        match self.pointer {
            Some(id) if id == event.id => return Err(RecognizerError::DuplicateDown { id }),
            Some(_) => return Ok(()),
            None => {}
        }

        self.reset();
        self.pointer = Some(event.id);
        self.start_position = event.position;
        self.position = event.position;
        self.velocity.add_position(event.uptime_ms, event.position);
        self.tracking_container = find_scroll_container(hierarchy, event.position, selection);
        Ok(())
    }

    fn track(&mut self, event: &PointerEvent) -> Result<Option<GesturePhase>, RecognizerError> {
        let Some(pointer) = self.pointer else {
            if event.kind == PointerEventKind::Move {
                // Hover: a mouse moving with no button held.
                return Ok(None);
            }
            return Err(RecognizerError::NoActivePointer { kind: event.kind });
        };
        if pointer != event.id {
            // Additional fingers don't take part in the drag.
            return Ok(None);
        }

        self.position = event.position;
        self.velocity.add_position(event.uptime_ms, event.position);

        Ok(match event.kind {
            PointerEventKind::Up => Some(self.finish(RecognizerState::Ended)),
            PointerEventKind::Cancel => Some(self.finish(RecognizerState::Cancelled)),
            PointerEventKind::Move | PointerEventKind::Down => self.moved(),
        })
    }

    fn moved(&mut self) -> Option<GesturePhase> {
        match self.state {
            RecognizerState::Possible if self.translation().length() > self.slop => {
                self.state = RecognizerState::Began;
                Some(GesturePhase::Began)
            }
            RecognizerState::Possible => None,
            RecognizerState::Began | RecognizerState::Changed => {
                self.state = RecognizerState::Changed;
                Some(GesturePhase::Changed)
            }
            RecognizerState::Ended | RecognizerState::Cancelled | RecognizerState::Failed => None,
        }
    }

    fn finish(&mut self, terminal: RecognizerState) -> GesturePhase {
        self.pointer = None;
        self.tracking_container = None;
        if self.state.is_recognized() {
            self.state = terminal;
            match terminal {
                RecognizerState::Cancelled => GesturePhase::Cancelled,
                _ => GesturePhase::Ended,
            }
        } else {
            self.state = RecognizerState::Failed;
            GesturePhase::Failed
        }
    }
}

#[cfg(test)]
#[path = "../tests/recognizer_tests.rs"]
mod tests;
