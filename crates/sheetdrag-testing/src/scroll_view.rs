//! A scroll view fake with native scrolling.
//!
//! Besides answering the [`ScrollContainer`] queries it can simulate the
//! platform's own pan: [`FakeScrollView::scroll_by`] moves the content with
//! the finger on every axis that is still enabled, clamped to the edge
//! limits (no rubber-banding).

use sheetdrag_foundation::scroll_container::edge_offset;
use sheetdrag_foundation::{Axis, Edge, ScrollContainer, ScrollContainerHandle, ViewId};
use sheetdrag_ui_graphics::{EdgeInsets, Point, Rect, Size};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct FakeScrollView {
    id: ViewId,
    frame: Rect,
    content: Size,
    inset: EdgeInsets,
    offset: Cell<Point>,
    horizontal_enabled: Cell<bool>,
    vertical_enabled: Cell<bool>,
    lock_history: RefCell<Vec<(Axis, bool)>>,
}

impl FakeScrollView {
    /// A view at `frame` (global coordinates) over `content`, resting at its
    /// top-left limit.
    pub fn new(id: u64, frame: Rect, content: Size) -> Rc<Self> {
        Self::with_inset(id, frame, content, EdgeInsets::ZERO)
    }

    pub fn with_inset(id: u64, frame: Rect, content: Size, inset: EdgeInsets) -> Rc<Self> {
        Rc::new(Self {
            id: ViewId(id),
            frame,
            content,
            inset,
            offset: Cell::new(Point::new(-inset.left, -inset.top)),
            horizontal_enabled: Cell::new(true),
            vertical_enabled: Cell::new(true),
            lock_history: RefCell::new(Vec::new()),
        })
    }

    /// A vertical list filling `frame` with `content_height` of rows.
    pub fn list(id: u64, frame: Rect, content_height: f32) -> Rc<Self> {
        Self::new(id, frame, Size::new(frame.width, content_height))
    }

    /// A horizontal strip filling `frame` with `content_width` of cards.
    pub fn carousel(id: u64, frame: Rect, content_width: f32) -> Rc<Self> {
        Self::new(id, frame, Size::new(content_width, frame.height))
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Frame in global coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn handle(self: &Rc<Self>) -> ScrollContainerHandle {
        ScrollContainerHandle::of(self)
    }

    pub fn offset(&self) -> Point {
        self.offset.get()
    }

    /// Places the content without recording a programmatic scroll.
    pub fn scroll_to_offset(&self, offset: Point) {
        self.offset.set(offset);
    }

    pub fn is_scroll_enabled(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal_enabled.get(),
            Axis::Vertical => self.vertical_enabled.get(),
        }
    }

    /// Every `set_scroll_enabled` call received, in order.
    pub fn lock_history(&self) -> Vec<(Axis, bool)> {
        self.lock_history.borrow().clone()
    }

    /// Applies a finger movement the way the native pan would: content moves
    /// against the finger on enabled axes. Returns the offset change.
    pub fn scroll_by(&self, finger_delta: Point) -> Point {
        let before = self.offset.get();
        let top_left = Point::new(
            edge_offset(self, Edge::Left).x,
            edge_offset(self, Edge::Top).y,
        );
        let bottom_right = Point::new(
            edge_offset(self, Edge::Right).x,
            edge_offset(self, Edge::Bottom).y,
        );

        let mut after = before;
        if self.horizontal_enabled.get() {
            after.x = (before.x - finger_delta.x).clamp(top_left.x, bottom_right.x);
        }
        if self.vertical_enabled.get() {
            after.y = (before.y - finger_delta.y).clamp(top_left.y, bottom_right.y);
        }
        self.offset.set(after);
        after - before
    }
}

impl ScrollContainer for FakeScrollView {
    fn view_id(&self) -> ViewId {
        self.id
    }

    fn content_offset(&self) -> Point {
        self.offset.get()
    }

    fn set_content_offset(&self, offset: Point) {
        log::trace!("{} content offset -> {:?}", self.id, offset);
        self.offset.set(offset);
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn content_inset(&self) -> EdgeInsets {
        self.inset
    }

    fn bounds_size(&self) -> Size {
        self.frame.size()
    }

    fn set_scroll_enabled(&self, axis: Axis, enabled: bool) {
        self.lock_history.borrow_mut().push((axis, enabled));
        match axis {
            Axis::Horizontal => self.horizontal_enabled.set(enabled),
            Axis::Vertical => self.vertical_enabled.set(enabled),
        }
    }
}
