//! In-crate fakes for unit tests. The richer harness lives in
//! `sheetdrag-testing`.

use sheetdrag_ui_graphics::{EdgeInsets, Point, Size};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::axis::Axis;
use crate::coordinate_space::{CoordinateSpace, CoordinateSpaceConverter};
use crate::scroll_container::{ScrollContainer, ScrollContainerHandle, ViewId};

pub(crate) struct TestScrollView {
    id: ViewId,
    offset: Cell<Point>,
    content: Size,
    inset: EdgeInsets,
    bounds: Size,
    horizontal_enabled: Cell<bool>,
    vertical_enabled: Cell<bool>,
    pub(crate) enable_calls: RefCell<Vec<(Axis, bool)>>,
    pub(crate) offset_writes: RefCell<Vec<Point>>,
}

impl TestScrollView {
    /// 300x400 viewport over 300x1200 content.
    pub(crate) fn vertical_list(id: u64) -> Rc<Self> {
        Self::with_geometry(id, Size::new(300.0, 400.0), Size::new(300.0, 1200.0))
    }

    pub(crate) fn with_geometry(id: u64, bounds: Size, content: Size) -> Rc<Self> {
        Self::with_inset(id, bounds, content, EdgeInsets::default())
    }

    /// Starts resting at the top-left limit implied by `inset`.
    pub(crate) fn with_inset(
        id: u64,
        bounds: Size,
        content: Size,
        inset: EdgeInsets,
    ) -> Rc<Self> {
        Rc::new(Self {
            id: ViewId(id),
            offset: Cell::new(Point::new(-inset.left, -inset.top)),
            content,
            inset,
            bounds,
            horizontal_enabled: Cell::new(true),
            vertical_enabled: Cell::new(true),
            enable_calls: RefCell::new(Vec::new()),
            offset_writes: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn place(&self, offset: Point) {
        self.offset.set(offset);
    }

    pub(crate) fn is_enabled(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal_enabled.get(),
            Axis::Vertical => self.vertical_enabled.get(),
        }
    }

    pub(crate) fn handle(self: &Rc<Self>) -> ScrollContainerHandle {
        ScrollContainerHandle::of(self)
    }
}

impl ScrollContainer for TestScrollView {
    fn view_id(&self) -> ViewId {
        self.id
    }

    fn content_offset(&self) -> Point {
        self.offset.get()
    }

    fn set_content_offset(&self, offset: Point) {
        self.offset_writes.borrow_mut().push(offset);
        self.offset.set(offset);
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn content_inset(&self) -> EdgeInsets {
        self.inset
    }

    fn bounds_size(&self) -> Size {
        self.bounds
    }

    fn set_scroll_enabled(&self, axis: Axis, enabled: bool) {
        self.enable_calls.borrow_mut().push((axis, enabled));
        match axis {
            Axis::Horizontal => self.horizontal_enabled.set(enabled),
            Axis::Vertical => self.vertical_enabled.set(enabled),
        }
    }
}

/// Reports a fixed location and velocity in every coordinate space.
#[derive(Clone, Copy, Default)]
pub(crate) struct FixedPointer {
    pub(crate) location: Point,
    pub(crate) velocity: Point,
}

impl CoordinateSpaceConverter for FixedPointer {
    fn location(&self, _space: &CoordinateSpace) -> Point {
        self.location
    }

    fn velocity(&self, _space: &CoordinateSpace) -> Option<Point> {
        Some(self.velocity)
    }
}
