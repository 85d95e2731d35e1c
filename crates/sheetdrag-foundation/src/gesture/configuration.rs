use std::cell::Cell;
use std::rc::Rc;

use crate::edges::EdgeSet;
use crate::input::ContainerSelection;

/// Per-gesture behaviour, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Configuration {
    /// Edges at which the drag may take over from the scroll container.
    pub target_edges: EdgeSet,
    /// Refuse to recognize together with any scroll container's own
    /// recognizers.
    pub ignores_scroll_view: bool,
    /// Once the drag has claimed an edge, keep claiming the axis for the rest
    /// of the gesture instead of handing movement back to the content.
    pub sticks_to_edges: bool,
    /// Which scroll container to track when several are nested under the
    /// touch.
    pub container_selection: ContainerSelection,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            target_edges: EdgeSet::ALL,
            ignores_scroll_view: false,
            sticks_to_edges: true,
            container_selection: ContainerSelection::Innermost,
        }
    }
}

impl Configuration {
    pub fn new(ignores_scroll_view: bool, target_edges: EdgeSet, sticks_to_edges: bool) -> Self {
        Self {
            target_edges,
            ignores_scroll_view,
            sticks_to_edges,
            ..Self::default()
        }
    }

    pub fn with_target_edges(mut self, target_edges: EdgeSet) -> Self {
        self.target_edges = target_edges;
        self
    }

    pub fn with_ignores_scroll_view(mut self, ignores_scroll_view: bool) -> Self {
        self.ignores_scroll_view = ignores_scroll_view;
        self
    }

    pub fn with_sticks_to_edges(mut self, sticks_to_edges: bool) -> Self {
        self.sticks_to_edges = sticks_to_edges;
        self
    }

    pub fn with_container_selection(mut self, container_selection: ContainerSelection) -> Self {
        self.container_selection = container_selection;
        self
    }
}

/// Caller-controlled toggle that hands the whole drag to the gesture,
/// locking both scroll axes regardless of edges.
///
/// Clones share the same flag, so the caller keeps one and gives the other
/// to the gesture.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    enabled: Rc<Cell<bool>>,
}

impl ScrollLock {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Rc::new(Cell::new(enabled)),
        }
    }

    /// A lock nobody else holds a clone of.
    pub fn constant(enabled: bool) -> Self {
        Self::new(enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}
