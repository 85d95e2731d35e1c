//! Robot-style driver for the interoperable drag gesture.
//!
//! The robot plays the host: it owns a [`FakeViewTree`], feeds pointer
//! events to an [`InteroperableDragGesture`] and, after each move, lets the
//! tracked scroll view scroll natively the way the platform pan would while
//! it is allowed to recognize alongside the drag.
//!
//! ```
//! use sheetdrag_foundation::Configuration;
//! use sheetdrag_testing::{FakeScrollView, FakeViewTree, GestureRobot};
//! use sheetdrag_ui_graphics::Rect;
//!
//! let list = FakeScrollView::list(2, Rect::new(0.0, 0.0, 300.0, 400.0), 1200.0);
//! let mut tree = FakeViewTree::new();
//! tree.add_scroll_view(None, &list);
//!
//! let mut robot = GestureRobot::new(tree, Configuration::default());
//! robot.drag((150.0, 100.0), (150.0, 200.0), 10);
//! assert_eq!(robot.ends().len(), 1);
//! ```

use sheetdrag_foundation::{
    Configuration, CoordinateSpace, DragValue, InteroperableDragGesture, PointerEvent,
    RecognizerInfo, ScrollLock,
};
use sheetdrag_ui_graphics::{Point, Size};
use std::cell::RefCell;
use std::rc::Rc;

use crate::view_tree::FakeViewTree;

/// Milliseconds between two consecutive robot events.
pub const FRAME_MS: u64 = 16;

type Recorded = Rc<RefCell<Vec<DragValue>>>;

pub struct GestureRobot {
    tree: FakeViewTree,
    gesture: InteroperableDragGesture,
    changes: Recorded,
    ends: Recorded,
    position: Point,
    pressed: bool,
    clock_ms: u64,
}

impl GestureRobot {
    pub fn new(tree: FakeViewTree, configuration: Configuration) -> Self {
        Self::with_options(tree, configuration, ScrollLock::default(), CoordinateSpace::Global)
    }

    pub fn with_options(
        tree: FakeViewTree,
        configuration: Configuration,
        scroll_lock: ScrollLock,
        coordinate_space: CoordinateSpace,
    ) -> Self {
        let changes: Recorded = Rc::default();
        let ends: Recorded = Rc::default();
        let gesture = InteroperableDragGesture::new(
            configuration,
            scroll_lock,
            coordinate_space,
            {
                let changes = changes.clone();
                move |value| changes.borrow_mut().push(value)
            },
            {
                let ends = ends.clone();
                move |value| ends.borrow_mut().push(value)
            },
        );
        Self {
            tree,
            gesture,
            changes,
            ends,
            position: Point::ZERO,
            pressed: false,
            clock_ms: 0,
        }
    }

    pub fn gesture(&self) -> &InteroperableDragGesture {
        &self.gesture
    }

    pub fn gesture_mut(&mut self) -> &mut InteroperableDragGesture {
        &mut self.gesture
    }

    pub fn tree(&self) -> &FakeViewTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut FakeViewTree {
        &mut self.tree
    }

    /// Every value passed to `on_change` so far.
    pub fn changes(&self) -> Vec<DragValue> {
        self.changes.borrow().clone()
    }

    /// Every value passed to `on_end` so far.
    pub fn ends(&self) -> Vec<DragValue> {
        self.ends.borrow().clone()
    }

    pub fn last_end(&self) -> Option<DragValue> {
        self.ends.borrow().last().copied()
    }

    /// Translation of the most recent change, zero if none was reported.
    pub fn reported_translation(&self) -> Size {
        self.changes
            .borrow()
            .last()
            .map(|value| value.translation)
            .unwrap_or(Size::ZERO)
    }

    /// Forgets recorded callbacks.
    pub fn clear(&mut self) {
        self.changes.borrow_mut().clear();
        self.ends.borrow_mut().clear();
    }

    pub fn down(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
        self.pressed = true;
        let event = PointerEvent::down(self.position, self.tick());
        self.gesture.handle_pointer_event(&event, &self.tree);
    }

    /// Moves the pointer. Without a press this is a hover, like a mouse
    /// moving with no button held.
    pub fn move_to(&mut self, x: f32, y: f32) {
        let target = Point::new(x, y);
        let delta = target - self.position;
        self.position = target;
        let event = PointerEvent::moved(self.position, self.tick());
        self.gesture.handle_pointer_event(&event, &self.tree);
        if self.pressed {
            self.scroll_natively(delta);
        }
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.move_to(self.position.x + dx, self.position.y + dy);
    }

    pub fn up(&mut self) {
        self.pressed = false;
        let event = PointerEvent::up(self.position, self.tick());
        self.gesture.handle_pointer_event(&event, &self.tree);
    }

    pub fn cancel(&mut self) {
        self.pressed = false;
        let event = PointerEvent::cancel(self.position, self.tick());
        self.gesture.handle_pointer_event(&event, &self.tree);
    }

    /// Presses at `from`, moves to `to` in `steps` equal moves and lifts.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), steps: usize) {
        self.down(from.0, from.1);
        self.drag_to(to, steps);
        self.up();
    }

    /// Moves the pressed pointer to `to` in `steps` equal moves.
    pub fn drag_to(&mut self, to: (f32, f32), steps: usize) {
        let from = self.position;
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from.x + (to.0 - from.x) * t, from.y + (to.1 - from.y) * t);
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock_ms += FRAME_MS;
        self.clock_ms
    }

    fn scroll_natively(&self, delta: Point) {
        let Some(id) = self.gesture.tracked_container() else {
            return;
        };
        let Some(scroll_view) = self.tree.scroll_view(id) else {
            return;
        };
        let cooperates = self
            .gesture
            .should_recognize_simultaneously(&RecognizerInfo::scroll_pan(id));
        if cooperates || !self.gesture.is_active() {
            scroll_view.scroll_by(delta);
        }
    }
}
