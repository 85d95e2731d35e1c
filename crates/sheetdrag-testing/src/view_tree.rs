//! A small view hierarchy for driving hit-tests in tests.

use sheetdrag_foundation::{ScrollContainer, ViewHierarchy, ViewId};
use sheetdrag_ui_graphics::{Point, Rect};
use std::rc::Rc;

use crate::scroll_view::FakeScrollView;

struct Node {
    id: ViewId,
    parent: Option<ViewId>,
    frame: Rect,
    scroll_view: Option<Rc<FakeScrollView>>,
}

/// Views are hit-tested in reverse insertion order, so children added after
/// their parents sit on top of them.
#[derive(Default)]
pub struct FakeViewTree {
    nodes: Vec<Node>,
}

impl FakeViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain view at `frame` (global coordinates).
    pub fn add_view(&mut self, id: u64, parent: Option<u64>, frame: Rect) -> &mut Self {
        self.nodes.push(Node {
            id: ViewId(id),
            parent: parent.map(ViewId),
            frame,
            scroll_view: None,
        });
        self
    }

    /// Adds a scroll view under `parent`, using the view's own id and frame.
    pub fn add_scroll_view(&mut self, parent: Option<u64>, view: &Rc<FakeScrollView>) -> &mut Self {
        self.nodes.push(Node {
            id: view.id(),
            parent: parent.map(ViewId),
            frame: view.frame(),
            scroll_view: Some(view.clone()),
        });
        self
    }

    /// Removes a view, e.g. to simulate a container torn down mid-gesture.
    /// Children keep pointing at the removed id.
    pub fn remove(&mut self, id: u64) {
        self.nodes.retain(|node| node.id != ViewId(id));
    }

    pub fn scroll_view(&self, id: ViewId) -> Option<Rc<FakeScrollView>> {
        self.node(id).and_then(|node| node.scroll_view.clone())
    }

    fn node(&self, id: ViewId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

impl ViewHierarchy for FakeViewTree {
    fn hit_test(&self, point: Point) -> Option<ViewId> {
        self.nodes
            .iter()
            .rev()
            .find(|node| node.frame.contains(point))
            .map(|node| node.id)
    }

    fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.node(view).and_then(|node| node.parent)
    }

    fn scroll_container(&self, view: ViewId) -> Option<Rc<dyn ScrollContainer>> {
        self.scroll_view(view)
            .map(|scroll_view| scroll_view as Rc<dyn ScrollContainer>)
    }
}
