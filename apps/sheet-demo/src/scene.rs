//! A phone-sized screen: a bottom sheet hosting a scrolling list.

use sheetdrag_foundation::scroll_container::edge_offset;
use sheetdrag_foundation::{Axis, DragValue, Edge, ScrollContainer, ViewHierarchy, ViewId};
use sheetdrag_ui_graphics::{EdgeInsets, Point, Rect, Size};
use std::cell::Cell;
use std::rc::Rc;

pub const SCREEN: Rect = Rect::new(0.0, 0.0, 390.0, 844.0);
pub const SHEET_ID: ViewId = ViewId(1);
pub const LIST_ID: ViewId = ViewId(2);

const SHEET_TOP: f32 = 244.0;
const GRABBER_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 56.0;

/// Dismiss once the sheet is dragged this far down...
const DISMISS_DISTANCE: f32 = 160.0;
/// ...or released downward at least this fast (px/s).
const DISMISS_VELOCITY: f32 = 1_000.0;

pub struct ListView {
    rows: usize,
    offset: Cell<Point>,
    horizontal_enabled: Cell<bool>,
    vertical_enabled: Cell<bool>,
}

impl ListView {
    pub fn new(rows: usize) -> Rc<Self> {
        Rc::new(Self {
            rows,
            offset: Cell::new(Point::ZERO),
            horizontal_enabled: Cell::new(true),
            vertical_enabled: Cell::new(true),
        })
    }

    /// Native pan: content follows the finger on enabled axes, clamped.
    pub fn pan(&self, finger_delta: Point) {
        let offset = self.offset.get();
        let mut next = offset;
        if self.vertical_enabled.get() {
            let top = edge_offset(self, Edge::Top).y;
            let bottom = edge_offset(self, Edge::Bottom).y;
            next.y = (offset.y - finger_delta.y).clamp(top, bottom);
        }
        if self.horizontal_enabled.get() {
            let left = edge_offset(self, Edge::Left).x;
            let right = edge_offset(self, Edge::Right).x;
            next.x = (offset.x - finger_delta.x).clamp(left, right);
        }
        self.offset.set(next);
    }

    fn frame(&self) -> Rect {
        Rect::new(
            0.0,
            SHEET_TOP + GRABBER_HEIGHT,
            SCREEN.width,
            SCREEN.height - SHEET_TOP - GRABBER_HEIGHT,
        )
    }
}

impl ScrollContainer for ListView {
    fn view_id(&self) -> ViewId {
        LIST_ID
    }

    fn content_offset(&self) -> Point {
        self.offset.get()
    }

    fn set_content_offset(&self, offset: Point) {
        self.offset.set(offset);
    }

    fn content_size(&self) -> Size {
        Size::new(SCREEN.width, self.rows as f32 * ROW_HEIGHT)
    }

    fn content_inset(&self) -> EdgeInsets {
        // Room for the home indicator.
        EdgeInsets::from_components(0.0, 0.0, 0.0, 34.0)
    }

    fn bounds_size(&self) -> Size {
        self.frame().size()
    }

    fn set_scroll_enabled(&self, axis: Axis, enabled: bool) {
        match axis {
            Axis::Horizontal => self.horizontal_enabled.set(enabled),
            Axis::Vertical => self.vertical_enabled.set(enabled),
        }
    }
}

/// Where the sheet sits and whether it has been dismissed.
#[derive(Default)]
pub struct Sheet {
    offset: Cell<f32>,
    dismissed: Cell<bool>,
}

impl Sheet {
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed.get()
    }

    pub fn follow(&self, value: DragValue) {
        // The sheet never rises above its resting position.
        self.offset.set(value.translation.height.max(0.0));
    }

    pub fn settle(&self, value: DragValue) {
        let pulled = value.translation.height;
        if pulled > DISMISS_DISTANCE || value.velocity.height > DISMISS_VELOCITY {
            log::info!(
                "sheet dismissed (pulled {pulled:.0}px at {:.0}px/s)",
                value.velocity.height
            );
            self.dismissed.set(true);
        } else {
            log::info!("sheet snaps back from {pulled:.0}px");
        }
        self.offset.set(0.0);
    }
}

/// screen > sheet(1) > list(2)
pub struct Screen {
    pub list: Rc<ListView>,
}

impl Screen {
    pub fn new(rows: usize) -> Self {
        Self {
            list: ListView::new(rows),
        }
    }

    pub fn sheet_frame(&self) -> Rect {
        Rect::new(0.0, SHEET_TOP, SCREEN.width, SCREEN.height - SHEET_TOP)
    }
}

impl ViewHierarchy for Screen {
    fn hit_test(&self, point: Point) -> Option<ViewId> {
        if self.list.frame().contains(point) {
            Some(LIST_ID)
        } else if self.sheet_frame().contains(point) {
            Some(SHEET_ID)
        } else {
            None
        }
    }

    fn parent(&self, view: ViewId) -> Option<ViewId> {
        (view == LIST_ID).then_some(SHEET_ID)
    }

    fn scroll_container(&self, view: ViewId) -> Option<Rc<dyn ScrollContainer>> {
        (view == LIST_ID).then(|| self.list.clone() as Rc<dyn ScrollContainer>)
    }
}
