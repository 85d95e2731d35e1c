//! Lock/unlock/scroll facade over the tracked container.
//!
//! The controller remembers which axes it has disabled so repeated lock or
//! unlock requests for the same state never reach the container twice.
//! Whatever it still holds is released on [`ScrollController::unlock_all`]
//! and again, as a backstop, when the controller is dropped.

use crate::axis::Axes;
use crate::edges::{Edge, EdgeSet};
use crate::scroll_container::{edge_offset, scrollable_edges, ScrollContainerHandle, ViewId};

#[derive(Debug)]
pub struct ScrollController {
    handle: ScrollContainerHandle,
    locked: Axes,
}

impl ScrollController {
    pub fn new(handle: ScrollContainerHandle) -> Self {
        Self {
            handle,
            locked: Axes::empty(),
        }
    }

    pub fn container_id(&self) -> ViewId {
        self.handle.id()
    }

    pub fn handle(&self) -> &ScrollContainerHandle {
        &self.handle
    }

    /// Axes this controller currently keeps from scrolling natively.
    pub fn locked_axes(&self) -> Axes {
        self.locked
    }

    /// Edges the container can still scroll toward, read from live geometry.
    /// Empty once the container is gone.
    pub fn scrollable_edges(&self) -> EdgeSet {
        self.handle
            .upgrade()
            .map(|container| scrollable_edges(&*container))
            .unwrap_or_default()
    }

    /// Disables native scrolling on `axes`. Axes already locked are left
    /// alone.
    pub fn lock_scrolling(&mut self, axes: Axes) {
        let newly_locked = axes - self.locked;
        if newly_locked.is_empty() {
            return;
        }
        if let Some(container) = self.handle.upgrade() {
            for axis in newly_locked.axes() {
                container.set_scroll_enabled(axis, false);
            }
        }
        log::trace!("locked {:?} on {}", newly_locked, self.handle.id());
        self.locked |= newly_locked;
    }

    /// Re-enables native scrolling on `axes` this controller had locked.
    pub fn unlock_scrolling(&mut self, axes: Axes) {
        let released = axes & self.locked;
        if released.is_empty() {
            return;
        }
        if let Some(container) = self.handle.upgrade() {
            for axis in released.axes() {
                container.set_scroll_enabled(axis, true);
            }
        }
        log::trace!("unlocked {:?} on {}", released, self.handle.id());
        self.locked -= released;
    }

    pub fn unlock_all(&mut self) {
        self.unlock_scrolling(Axes::BOTH);
    }

    /// Moves the content so it rests against `edge`.
    pub fn scroll_to(&self, edge: Edge) {
        if let Some(container) = self.handle.upgrade() {
            let target = edge_offset(&*container, edge);
            if container.content_offset() != target {
                log::trace!("scrolling {} to {edge} ({target:?})", self.handle.id());
                container.set_content_offset(target);
            }
        }
    }
}

impl Drop for ScrollController {
    fn drop(&mut self) {
        self.unlock_all();
    }
}
