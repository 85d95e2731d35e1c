//! Locating the scroll container under the initial touch.
//!
//! Like a hit path tracker, this resolves view identities against the host's
//! current hierarchy instead of caching geometry: the host answers
//! hit-tests and parent lookups by [`ViewId`], and the result is a weak
//! [`ScrollContainerHandle`] the gesture keeps for the rest of the touch.

use sheetdrag_ui_graphics::Point;
use smallvec::SmallVec;
use std::rc::Rc;

use crate::scroll_container::{
    has_scrollable_content, ScrollContainer, ScrollContainerHandle, ViewId,
};

/// The host's view tree, as seen by hit-testing.
pub trait ViewHierarchy {
    /// Deepest view containing `point` (global coordinates).
    fn hit_test(&self, point: Point) -> Option<ViewId>;

    fn parent(&self, view: ViewId) -> Option<ViewId>;

    /// The scroll container backing `view`, if it is one.
    fn scroll_container(&self, view: ViewId) -> Option<Rc<dyn ScrollContainer>>;
}

/// Which qualifying container to track when several are nested under the
/// touch point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContainerSelection {
    /// The container closest to the touched view.
    #[default]
    Innermost,
    /// The container closest to the root.
    Outermost,
}

/// Views from `view` up to the root, touched view first.
pub fn ancestor_path(hierarchy: &dyn ViewHierarchy, view: ViewId) -> SmallVec<[ViewId; 16]> {
    let mut path = SmallVec::new();
    let mut current = Some(view);
    while let Some(id) = current {
        path.push(id);
        current = hierarchy.parent(id);
    }
    path
}

/// Finds the scroll container the gesture should interoperate with.
///
/// Only containers whose content fills the viewport on at least one axis
/// qualify; returns `None` when nothing under `point` does.
pub fn find_scroll_container(
    hierarchy: &dyn ViewHierarchy,
    point: Point,
    selection: ContainerSelection,
) -> Option<ScrollContainerHandle> {
    let touched = hierarchy.hit_test(point)?;
    let path = ancestor_path(hierarchy, touched);

    let mut qualifying = path.iter().filter_map(|id| {
        hierarchy
            .scroll_container(*id)
            .filter(|container| has_scrollable_content(&**container))
    });

    let container = match selection {
        ContainerSelection::Innermost => qualifying.next(),
        ContainerSelection::Outermost => qualifying.last(),
    }?;

    log::debug!(
        "tracking scroll container {} under {:?} ({:?})",
        container.view_id(),
        point,
        selection
    );
    Some(ScrollContainerHandle::new(&container))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestScrollView;
    use sheetdrag_ui_graphics::Size;
    use std::collections::HashMap;

    /// sheet(1) > list(2) > row(3) > carousel(4) > card(5)
    struct Tree {
        parents: HashMap<ViewId, ViewId>,
        containers: HashMap<ViewId, Rc<TestScrollView>>,
        hit: Option<ViewId>,
    }

    impl Tree {
        fn nested(list_content: f32, carousel_content: f32) -> Self {
            let parents = [(2, 1), (3, 2), (4, 3), (5, 4)]
                .into_iter()
                .map(|(child, parent)| (ViewId(child), ViewId(parent)))
                .collect();
            let mut containers = HashMap::new();
            containers.insert(
                ViewId(2),
                TestScrollView::with_geometry(
                    2,
                    Size::new(300.0, 400.0),
                    Size::new(300.0, list_content),
                ),
            );
            containers.insert(
                ViewId(4),
                TestScrollView::with_geometry(
                    4,
                    Size::new(300.0, 100.0),
                    Size::new(carousel_content, 50.0),
                ),
            );
            Self {
                parents,
                containers,
                hit: Some(ViewId(5)),
            }
        }
    }

    impl ViewHierarchy for Tree {
        fn hit_test(&self, _point: Point) -> Option<ViewId> {
            self.hit
        }

        fn parent(&self, view: ViewId) -> Option<ViewId> {
            self.parents.get(&view).copied()
        }

        fn scroll_container(&self, view: ViewId) -> Option<Rc<dyn ScrollContainer>> {
            self.containers
                .get(&view)
                .map(|container| container.clone() as Rc<dyn ScrollContainer>)
        }
    }

    #[test]
    fn ancestor_path_starts_at_touched_view() {
        let tree = Tree::nested(1200.0, 900.0);
        let path = ancestor_path(&tree, ViewId(5));
        assert_eq!(
            path.as_slice(),
            &[ViewId(5), ViewId(4), ViewId(3), ViewId(2), ViewId(1)]
        );
    }

    #[test]
    fn innermost_picks_closest_container() {
        let tree = Tree::nested(1200.0, 900.0);
        let handle = find_scroll_container(&tree, Point::ZERO, ContainerSelection::Innermost)
            .expect("carousel qualifies");
        assert_eq!(handle.id(), ViewId(4));
    }

    #[test]
    fn outermost_picks_container_nearest_root() {
        let tree = Tree::nested(1200.0, 900.0);
        let handle = find_scroll_container(&tree, Point::ZERO, ContainerSelection::Outermost)
            .expect("list qualifies");
        assert_eq!(handle.id(), ViewId(2));
    }

    #[test]
    fn containers_without_enough_content_are_skipped() {
        // Carousel content is narrower than its viewport and shorter too.
        let tree = Tree::nested(1200.0, 200.0);
        let handle = find_scroll_container(&tree, Point::ZERO, ContainerSelection::Innermost)
            .expect("list still qualifies");
        assert_eq!(handle.id(), ViewId(2));
    }

    #[test]
    fn nothing_under_the_point_means_no_container() {
        let mut tree = Tree::nested(1200.0, 900.0);
        tree.hit = None;
        assert!(find_scroll_container(&tree, Point::ZERO, ContainerSelection::Innermost).is_none());

        tree.hit = Some(ViewId(1));
        assert!(find_scroll_container(&tree, Point::ZERO, ContainerSelection::Innermost).is_none());
    }
}
