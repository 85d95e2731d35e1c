//! Simultaneous-recognition policy between the drag and other recognizers.

use crate::gesture::Configuration;
use crate::scroll_container::ViewId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognizerKind {
    /// The scroll-view interoperable drag recognizer.
    InteroperableDrag,
    /// System edge-swipe (back navigation and the like).
    ScreenEdgePan,
    /// Any other pan, including a scroll container's own.
    Pan,
    Other,
}

/// What the policy needs to know about a recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecognizerInfo {
    pub kind: RecognizerKind,
    /// View the recognizer is attached to.
    pub view: Option<ViewId>,
    /// Whether that view is a scroll container.
    pub view_is_scroll_container: bool,
}

impl RecognizerInfo {
    pub fn new(kind: RecognizerKind) -> Self {
        Self {
            kind,
            view: None,
            view_is_scroll_container: false,
        }
    }

    pub fn attached_to(mut self, view: ViewId) -> Self {
        self.view = Some(view);
        self
    }

    /// Marks the attached view as a scroll container.
    pub fn attached_to_scroll_container(mut self, view: ViewId) -> Self {
        self.view = Some(view);
        self.view_is_scroll_container = true;
        self
    }

    /// The native pan of a scroll container.
    pub fn scroll_pan(container: ViewId) -> Self {
        Self::new(RecognizerKind::Pan).attached_to_scroll_container(container)
    }
}

/// Decides whether `other` may recognize together with the drag described
/// by `this`.
///
/// Cooperation is limited to the recognizer living on the tracked container
/// itself; recognizers on sibling containers keep their usual exclusivity.
pub fn should_recognize_simultaneously(
    this: &RecognizerInfo,
    other: &RecognizerInfo,
    configuration: &Configuration,
    tracked_container: Option<ViewId>,
) -> bool {
    if this.kind != RecognizerKind::InteroperableDrag {
        debug_assert!(false, "unexpected recognizer asked for cooperation: {this:?}");
        return false;
    }

    if other.kind == RecognizerKind::ScreenEdgePan {
        return false;
    }

    if configuration.ignores_scroll_view && other.view_is_scroll_container {
        return false;
    }

    tracked_container == other.view
}
