//! Edge arbitration between the drag and the tracked scroll container.
//!
//! Every movement increment is offered to the four directional claim rules.
//! A rule that claims locks the matching scroll axis, adds that axis' part of
//! the increment to the drag's own translation and records the claimed edge
//! as sticking. A rule that declines hands the axis back to the container.
//!
//! All per-gesture state lives in [`Tracking`], created when the gesture
//! begins and dropped at its terminal phase.

use sheetdrag_ui_graphics::{Point, Size};

use super::configuration::{Configuration, ScrollLock};
use super::value::{DragValue, GestureEvent, GesturePhase};
use crate::axis::{Axes, Axis};
use crate::coordinate_space::{CoordinateSpace, CoordinateSpaceConverter};
use crate::edges::{Edge, EdgeSet};
use crate::pan_direction::{PanDirection, PanDirectionDetector};
use crate::scroll_container::ScrollContainerHandle;
use crate::scroll_controller::ScrollController;

/// One directional claim rule.
///
/// The drag may take over when the pointer moves in `direction` and the
/// content can no longer scroll toward `edge`, or when the opposite edge is
/// already sticking. `guard` names the edge that, if scrollable when the
/// gesture began, blocks the rule outright.
#[derive(Clone, Copy, Debug)]
struct ClaimRule {
    direction: PanDirection,
    edge: Edge,
    guard: Edge,
}

// Evaluated in this order on every event. The rightward rule is guarded by
// the right edge like the leftward one.
const CLAIM_RULES: [ClaimRule; 4] = [
    ClaimRule {
        direction: PanDirection::UP,
        edge: Edge::Bottom,
        guard: Edge::Bottom,
    },
    ClaimRule {
        direction: PanDirection::DOWN,
        edge: Edge::Top,
        guard: Edge::Top,
    },
    ClaimRule {
        direction: PanDirection::LEFT,
        edge: Edge::Right,
        guard: Edge::Right,
    },
    ClaimRule {
        direction: PanDirection::RIGHT,
        edge: Edge::Left,
        guard: Edge::Right,
    },
];

impl ClaimRule {
    fn claims(
        &self,
        configuration: &Configuration,
        tracking: &Tracking,
        scrollable: EdgeSet,
    ) -> bool {
        if tracking.initial_scrollable_edges.has(self.guard) {
            return false;
        }
        let exhausted =
            configuration.target_edges.has(self.edge) && !scrollable.has(self.edge);
        let stuck = configuration.sticks_to_edges
            && tracking.sticking_edges.has(self.edge.opposite());
        exhausted || stuck
    }
}

/// State of one active gesture.
#[derive(Debug, Default)]
pub struct Tracking {
    /// The drag currently owns the horizontal axis.
    pub is_dragging_x: bool,
    /// The drag currently owns the vertical axis.
    pub is_dragging_y: bool,
    pub current_scroll_controller: Option<ScrollController>,
    /// Scrollable edges of the container when the gesture began.
    pub initial_scrollable_edges: EdgeSet,
    /// Movement the drag has claimed, summed per event.
    pub translation: Size,
    /// Edges the drag has claimed at least once during this gesture.
    pub sticking_edges: EdgeSet,
}

impl Tracking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dragging flag for `axis`.
    pub fn is_dragging(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.is_dragging_x,
            Axis::Vertical => self.is_dragging_y,
        }
    }

    fn set_dragging(&mut self, axis: Axis, dragging: bool) {
        match axis {
            Axis::Horizontal => self.is_dragging_x = dragging,
            Axis::Vertical => self.is_dragging_y = dragging,
        }
    }

    fn accumulate(&mut self, delta: Point, axes: Axes) {
        let mut claimed = Size::ZERO;
        if axes.contains(Axes::HORIZONTAL) {
            claimed.width = delta.x;
        }
        if axes.contains(Axes::VERTICAL) {
            claimed.height = delta.y;
        }
        self.translation += claimed;
    }

    /// Controller for `handle`, replacing one bound to a different container.
    fn controller_for(&mut self, handle: &ScrollContainerHandle) -> &mut ScrollController {
        let stale = self
            .current_scroll_controller
            .as_ref()
            .is_some_and(|controller| controller.container_id() != handle.id());
        if stale {
            // Dropping the old controller releases whatever it still holds.
            self.current_scroll_controller = None;
        }
        self.current_scroll_controller
            .get_or_insert_with(|| ScrollController::new(handle.clone()))
    }

    /// Takes `rule.edge`'s axis for the drag and returns the new translation.
    fn claim(
        &mut self,
        rule: &ClaimRule,
        handle: &ScrollContainerHandle,
        delta: Point,
        sticks: bool,
    ) -> Size {
        let axis = rule.edge.axis();
        let already_stuck = self.sticking_edges.has(rule.edge.opposite());

        let controller = self.controller_for(handle);
        controller.lock_scrolling(axis.into());
        if sticks && !already_stuck {
            controller.scroll_to(rule.edge);
        }

        if !self.is_dragging(axis) {
            log::debug!("drag claimed {axis:?} at {} edge", rule.edge);
        }
        self.set_dragging(axis, true);
        self.accumulate(delta, axis.into());
        self.sticking_edges |= rule.edge.into();
        self.translation
    }

    /// Hands `rule.edge`'s axis back to the container.
    fn decline(&mut self, rule: &ClaimRule, handle: &ScrollContainerHandle) {
        let axis = rule.edge.axis();
        self.controller_for(handle).unlock_scrolling(axis.into());
        self.set_dragging(axis, false);
    }

    fn release_locks(&mut self) {
        if let Some(controller) = self.current_scroll_controller.as_mut() {
            controller.unlock_all();
        }
    }
}

type Callback = Box<dyn FnMut(DragValue)>;

/// Runs the arbitration for one gesture instance.
///
/// Feed it recognizer phases through [`GestureArbiter::handle`]; it reports
/// claimed movement through `on_change` and the final value through
/// `on_end`.
pub struct GestureArbiter {
    configuration: Configuration,
    scroll_lock: ScrollLock,
    coordinate_space: CoordinateSpace,
    pan: PanDirectionDetector,
    tracking: Option<Tracking>,
    on_change: Callback,
    on_end: Callback,
}

impl GestureArbiter {
    pub fn new(
        configuration: Configuration,
        scroll_lock: ScrollLock,
        coordinate_space: CoordinateSpace,
        on_change: impl FnMut(DragValue) + 'static,
        on_end: impl FnMut(DragValue) + 'static,
    ) -> Self {
        Self {
            configuration,
            scroll_lock,
            coordinate_space,
            pan: PanDirectionDetector::new(),
            tracking: None,
            on_change: Box::new(on_change),
            on_end: Box::new(on_end),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn coordinate_space(&self) -> &CoordinateSpace {
        &self.coordinate_space
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    /// Tracking state of the active gesture.
    pub fn tracking(&self) -> Option<&Tracking> {
        self.tracking.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn handle(&mut self, event: &GestureEvent, converter: &dyn CoordinateSpaceConverter) {
        match event.phase {
            GesturePhase::Began => self.begin(event, converter),
            GesturePhase::Changed => {
                if self.tracking.is_none() {
                    debug_assert!(false, "changed phase without an active gesture");
                    log::warn!("ignoring changed phase without an active gesture");
                    return;
                }
                self.change(event, converter);
            }
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed => {
                self.end(event.phase, converter)
            }
        }
    }

    fn begin(&mut self, event: &GestureEvent, converter: &dyn CoordinateSpaceConverter) {
        if let Some(mut stale) = self.tracking.take() {
            log::warn!("gesture began while another was active; discarding the old one");
            stale.release_locks();
        }

        let mut tracking = Tracking::new();
        if let Some(handle) = event.container.as_ref().filter(|handle| handle.is_alive()) {
            let controller = tracking.controller_for(handle);
            tracking.initial_scrollable_edges = controller.scrollable_edges();
        }
        log::debug!(
            "drag began, container {:?}, initial scrollable edges [{}]",
            event.container.as_ref().map(ScrollContainerHandle::id),
            tracking.initial_scrollable_edges
        );

        self.pan.reset();
        self.tracking = Some(tracking);
        self.change(event, converter);
    }

    fn change(&mut self, event: &GestureEvent, converter: &dyn CoordinateSpaceConverter) {
        let step = self.pan.advance(event.translation);
        let Some(tracking) = self.tracking.as_mut() else {
            return;
        };

        let container = event.container.as_ref().filter(|handle| handle.is_alive());
        let Some(handle) = container else {
            tracking.is_dragging_x = true;
            tracking.is_dragging_y = true;
            tracking.accumulate(step.delta, Axes::BOTH);
            let translation = tracking.translation;
            self.emit_change(translation, converter);
            return;
        };

        if self.scroll_lock.is_enabled() {
            tracking.controller_for(handle).lock_scrolling(Axes::BOTH);
            tracking.accumulate(step.delta, Axes::BOTH);
            let translation = tracking.translation;
            self.emit_change(translation, converter);
            return;
        }

        let scrollable = tracking.controller_for(handle).scrollable_edges();
        log::trace!(
            "step {:?} {:?}, scrollable [{}], sticking [{}]",
            step.direction,
            step.delta,
            scrollable,
            tracking.sticking_edges
        );

        let sticks = self.configuration.sticks_to_edges;
        for rule in CLAIM_RULES.iter().filter(|rule| step.direction.contains(rule.direction)) {
            let Some(tracking) = self.tracking.as_mut() else {
                return;
            };
            if rule.claims(&self.configuration, tracking, scrollable) {
                let translation = tracking.claim(rule, handle, step.delta, sticks);
                self.emit_change(translation, converter);
            } else {
                tracking.decline(rule, handle);
            }
        }
    }

    fn end(&mut self, phase: GesturePhase, converter: &dyn CoordinateSpaceConverter) {
        let Some(mut tracking) = self.tracking.take() else {
            log::trace!("{phase:?} without an active gesture");
            return;
        };

        let mut value = self.make_value(tracking.translation, converter);
        if !tracking.is_dragging_x {
            value.velocity.width = 0.0;
        }
        if !tracking.is_dragging_y {
            value.velocity.height = 0.0;
        }
        log::debug!(
            "drag {phase:?}, translation {:?}, velocity {:?}",
            value.translation,
            value.velocity
        );

        (self.on_end)(value);
        tracking.release_locks();
        self.pan.reset();
    }

    fn emit_change(&mut self, translation: Size, converter: &dyn CoordinateSpaceConverter) {
        let value = self.make_value(translation, converter);
        (self.on_change)(value);
    }

    fn make_value(&self, translation: Size, converter: &dyn CoordinateSpaceConverter) -> DragValue {
        let velocity = converter
            .velocity(&self.coordinate_space)
            .unwrap_or(Point::ZERO);
        DragValue {
            translation,
            location: converter.location(&self.coordinate_space),
            velocity: velocity.into(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/arbitration_tests.rs"]
mod tests;
