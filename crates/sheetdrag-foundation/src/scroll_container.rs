//! Host-side scrollable containers.
//!
//! The gesture never owns a container. It keeps a [`ScrollContainerHandle`]
//! (a weak reference plus the container's view id) captured at touch-down and
//! resolves it on every event, so a container torn down mid-gesture simply
//! degrades to "no container" behaviour. Geometry is always read fresh from
//! the container; nothing here caches offsets or sizes.

use sheetdrag_ui_graphics::{EdgeInsets, Point, Size};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::axis::Axis;
use crate::edges::{Edge, EdgeSet};

/// Stable identity of a view in the host hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A natively scrolling container owned by the host.
///
/// Methods take `&self`; implementations are expected to use interior
/// mutability the way single-threaded UI objects usually do.
pub trait ScrollContainer {
    /// Identity of the view backing this container.
    fn view_id(&self) -> ViewId;

    /// Current content offset. `(-inset.left, -inset.top)` is the resting
    /// position at the top-left limit.
    fn content_offset(&self) -> Point;

    /// Moves the content immediately, without animation.
    fn set_content_offset(&self, offset: Point);

    fn content_size(&self) -> Size;

    /// Content inset, already adjusted for any system chrome.
    fn content_inset(&self) -> EdgeInsets;

    /// Size of the visible viewport.
    fn bounds_size(&self) -> Size;

    /// Enables or disables the container's native scroll response on `axis`.
    fn set_scroll_enabled(&self, axis: Axis, enabled: bool);
}

/// Edges the container can still scroll toward.
///
/// An edge is present while the content has not reached its limit on that
/// side; a container resting at the top therefore lacks [`EdgeSet::TOP`].
pub fn scrollable_edges(container: &dyn ScrollContainer) -> EdgeSet {
    let offset = container.content_offset();
    let inset = container.content_inset();
    let bounds = container.bounds_size();
    let content = container.content_size();

    EdgeSet::from_predicate(|edge| match edge {
        Edge::Top => offset.y > -inset.top,
        Edge::Left => offset.x > -inset.left,
        Edge::Bottom => offset.y + bounds.height < content.height + inset.bottom,
        Edge::Right => offset.x + bounds.width < content.width + inset.right,
    })
}

/// Content offset that rests the container against `edge`, leaving the
/// cross-axis component untouched.
pub fn edge_offset(container: &dyn ScrollContainer, edge: Edge) -> Point {
    let offset = container.content_offset();
    let inset = container.content_inset();
    let bounds = container.bounds_size();
    let content = container.content_size();

    let min_x = -inset.left;
    let min_y = -inset.top;
    let max_x = (content.width + inset.right - bounds.width).max(min_x);
    let max_y = (content.height + inset.bottom - bounds.height).max(min_y);

    match edge {
        Edge::Top => Point::new(offset.x, min_y),
        Edge::Bottom => Point::new(offset.x, max_y),
        Edge::Left => Point::new(min_x, offset.y),
        Edge::Right => Point::new(max_x, offset.y),
    }
}

/// Whether the content is at least as large as the visible area on some
/// axis. Only such containers are picked up by hit-testing.
pub fn has_scrollable_content(container: &dyn ScrollContainer) -> bool {
    let inset = container.content_inset();
    let bounds = container.bounds_size();
    let content = container.content_size();

    bounds.width - inset.horizontal_sum() <= content.width
        || bounds.height - inset.vertical_sum() <= content.height
}

/// Non-owning reference to a [`ScrollContainer`].
#[derive(Clone)]
pub struct ScrollContainerHandle {
    id: ViewId,
    container: Weak<dyn ScrollContainer>,
}

impl ScrollContainerHandle {
    pub fn new(container: &Rc<dyn ScrollContainer>) -> Self {
        Self {
            id: container.view_id(),
            container: Rc::downgrade(container),
        }
    }

    /// Convenience for concrete container types.
    pub fn of<C: ScrollContainer + 'static>(container: &Rc<C>) -> Self {
        let container: Rc<dyn ScrollContainer> = container.clone();
        Self::new(&container)
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Resolves the handle. Returns `None` once the host has dropped the
    /// container.
    pub fn upgrade(&self) -> Option<Rc<dyn ScrollContainer>> {
        self.container.upgrade()
    }

    pub fn is_alive(&self) -> bool {
        self.container.strong_count() > 0
    }
}

impl fmt::Debug for ScrollContainerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollContainerHandle")
            .field("id", &self.id)
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/scroll_container_tests.rs"]
mod tests;
