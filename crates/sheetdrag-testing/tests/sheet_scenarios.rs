use sheetdrag_foundation::{
    Axis, Configuration, ContainerSelection, CoordinateSpace, RecognizerInfo, RecognizerKind,
    ScrollLock, ViewId,
};
use sheetdrag_testing::prelude::*;
use sheetdrag_ui_graphics::{Point, Rect, Size};
use std::rc::Rc;

const SHEET: Rect = Rect::new(0.0, 200.0, 390.0, 600.0);
const LIST: Rect = Rect::new(0.0, 244.0, 390.0, 556.0);
const CAROUSEL: Rect = Rect::new(0.0, 300.0, 390.0, 120.0);

/// sheet(1) > list(2) > carousel(3)
struct Scene {
    tree: FakeViewTree,
    list: Rc<FakeScrollView>,
    carousel: Rc<FakeScrollView>,
}

fn scene(list_content_height: f32) -> Scene {
    let list = FakeScrollView::list(2, LIST, list_content_height);
    let carousel = FakeScrollView::carousel(3, CAROUSEL, 1200.0);
    let mut tree = FakeViewTree::new();
    tree.add_view(1, None, SHEET)
        .add_scroll_view(Some(1), &list)
        .add_scroll_view(Some(2), &carousel);
    Scene {
        tree,
        list,
        carousel,
    }
}

#[test]
fn pulling_down_a_list_at_its_top_drags_the_sheet() {
    let Scene { tree, list, .. } = scene(2000.0);
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.drag((195.0, 500.0), (195.0, 600.0), 10);

    let changes = robot.changes();
    assert_eq!(changes.len(), 10);
    assert_size_approx_eq(changes[0].translation, Size::new(0.0, 10.0), 0.01, "first step");
    assert_size_approx_eq(robot.reported_translation(), Size::new(0.0, 100.0), 0.01, "sheet");

    let end = robot.last_end().expect("gesture ended");
    assert_size_approx_eq(end.translation, Size::new(0.0, 100.0), 0.01, "end translation");
    assert_eq!(end.velocity.width, 0.0);
    assert!(end.velocity.height > 0.0, "downward fling expected, got {:?}", end.velocity);

    assert_eq!(list.offset(), Point::ZERO);
    assert!(list.is_scroll_enabled(Axis::Vertical));
    assert!(list.is_scroll_enabled(Axis::Horizontal));
}

#[test]
fn scrolled_list_keeps_the_drag_for_itself() {
    let Scene { tree, list, .. } = scene(2000.0);
    list.scroll_to_offset(Point::new(0.0, 300.0));
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.drag((195.0, 500.0), (195.0, 600.0), 10);

    assert!(robot.changes().is_empty());
    assert_point_approx_eq(list.offset(), Point::new(0.0, 200.0), 0.01, "list offset");
    let end = robot.last_end().expect("gesture ended");
    assert_eq!(end.translation, Size::ZERO);
    assert_eq!(end.velocity, Size::ZERO);
}

#[test]
fn reaching_the_top_mid_gesture_does_not_hand_over_the_drag() {
    let Scene { tree, list, .. } = scene(2000.0);
    list.scroll_to_offset(Point::new(0.0, 50.0));
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.drag((195.0, 450.0), (195.0, 600.0), 15);
    assert_eq!(list.offset(), Point::ZERO);
    assert!(robot.changes().is_empty());

    // A fresh pull from the top moves the sheet.
    robot.drag((195.0, 450.0), (195.0, 530.0), 8);
    assert_size_approx_eq(robot.reported_translation(), Size::new(0.0, 80.0), 0.01, "sheet");
    assert_eq!(robot.ends().len(), 2);
}

#[test]
fn pulling_up_at_the_top_scrolls_the_content() {
    let Scene { tree, list, .. } = scene(2000.0);
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.drag((195.0, 600.0), (195.0, 500.0), 10);

    assert!(robot.changes().is_empty());
    assert_point_approx_eq(list.offset(), Point::new(0.0, 100.0), 0.01, "list offset");
}

#[test]
fn sheet_follows_a_reversal_over_short_content() {
    // Content exactly fills the list: it is tracked but cannot scroll.
    let Scene { tree, list, .. } = scene(LIST.height);
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.down(195.0, 500.0);
    robot.drag_to((195.0, 560.0), 6);
    robot.drag_to((195.0, 460.0), 10);
    robot.up();

    assert_size_approx_eq(robot.reported_translation(), Size::new(0.0, -40.0), 0.01, "sheet");
    let end = robot.last_end().expect("gesture ended");
    assert_size_approx_eq(end.translation, Size::new(0.0, -40.0), 0.01, "end translation");
    assert!(list.is_scroll_enabled(Axis::Vertical));
    assert_eq!(list.offset(), Point::ZERO);
}

#[test]
fn vertical_pull_on_a_carousel_moves_the_sheet() {
    let Scene { tree, carousel, .. } = scene(2000.0);
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.down(195.0, 350.0);
    assert_eq!(robot.gesture().tracked_container(), Some(ViewId(3)));
    robot.drag_to((195.0, 410.0), 6);
    robot.up();

    assert_size_approx_eq(robot.reported_translation(), Size::new(0.0, 60.0), 0.01, "sheet");
    assert!(carousel.is_scroll_enabled(Axis::Vertical));
}

#[test]
fn horizontal_swipes_belong_to_the_carousel_resting_at_its_start() {
    let Scene { tree, carousel, .. } = scene(2000.0);
    let mut robot = GestureRobot::new(tree, Configuration::default());

    // Rightward at the left end: nothing to scroll and the drag stays out.
    robot.drag((100.0, 350.0), (200.0, 350.0), 10);
    assert!(robot.changes().is_empty());
    assert_eq!(carousel.offset(), Point::ZERO);

    robot.drag((300.0, 350.0), (200.0, 350.0), 10);
    assert!(robot.changes().is_empty());
    assert_point_approx_eq(carousel.offset(), Point::new(100.0, 0.0), 0.01, "carousel");
}

#[test]
fn outermost_selection_tracks_the_list_over_a_carousel() {
    let Scene { tree, .. } = scene(2000.0);
    let configuration =
        Configuration::default().with_container_selection(ContainerSelection::Outermost);
    let mut robot = GestureRobot::new(tree, configuration);

    robot.down(195.0, 350.0);
    assert_eq!(robot.gesture().tracked_container(), Some(ViewId(2)));
    robot.up();
}

#[test]
fn scroll_lock_moves_the_sheet_on_both_axes() {
    let Scene { tree, list, .. } = scene(2000.0);
    list.scroll_to_offset(Point::new(0.0, 300.0));
    let lock = ScrollLock::new(true);
    let mut robot = GestureRobot::with_options(
        tree,
        Configuration::default(),
        lock.clone(),
        CoordinateSpace::Global,
    );

    robot.drag((195.0, 500.0), (225.0, 540.0), 5);

    assert_size_approx_eq(robot.reported_translation(), Size::new(30.0, 40.0), 0.01, "sheet");
    assert_eq!(list.offset(), Point::new(0.0, 300.0));
    assert!(list.is_scroll_enabled(Axis::Vertical));
    assert!(list.is_scroll_enabled(Axis::Horizontal));
}

#[test]
fn a_tap_reports_nothing() {
    let Scene { tree, .. } = scene(2000.0);
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.down(195.0, 500.0);
    robot.move_by(2.0, 3.0);
    robot.up();

    assert!(robot.changes().is_empty());
    assert!(robot.ends().is_empty());
    assert!(!robot.gesture().is_active());
}

#[test]
fn cancelling_ends_once_and_releases_the_list() {
    let Scene { tree, list, .. } = scene(2000.0);
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.down(195.0, 500.0);
    robot.drag_to((195.0, 540.0), 4);
    assert!(!list.is_scroll_enabled(Axis::Vertical));
    robot.cancel();

    assert_eq!(robot.ends().len(), 1);
    assert!(list.is_scroll_enabled(Axis::Vertical));
    assert!(robot.gesture().tracking().is_none());
}

#[test]
fn cooperation_is_limited_to_the_tracked_container() {
    let Scene { tree, .. } = scene(2000.0);
    let mut robot = GestureRobot::new(tree, Configuration::default());
    robot.down(195.0, 500.0);

    let gesture = robot.gesture();
    assert!(gesture.should_recognize_simultaneously(&RecognizerInfo::scroll_pan(ViewId(2))));
    assert!(!gesture.should_recognize_simultaneously(&RecognizerInfo::scroll_pan(ViewId(3))));
    assert!(!gesture.should_recognize_simultaneously(
        &RecognizerInfo::new(RecognizerKind::ScreenEdgePan).attached_to(ViewId(2))
    ));
}

#[test]
fn cooperation_ends_when_the_finger_lifts() {
    let Scene { tree, .. } = scene(2000.0);
    let mut robot = GestureRobot::new(tree, Configuration::default());
    let list_pan = RecognizerInfo::scroll_pan(ViewId(2));

    robot.drag((195.0, 500.0), (195.0, 600.0), 10);
    assert_eq!(robot.gesture().tracked_container(), None);
    assert!(!robot.gesture().should_recognize_simultaneously(&list_pan));

    // A tap over the carousel never recognizes but still drops its container.
    robot.down(195.0, 350.0);
    assert_eq!(robot.gesture().tracked_container(), Some(ViewId(3)));
    robot.up();
    assert_eq!(robot.gesture().tracked_container(), None);
}

#[test]
fn hovering_before_a_press_reports_nothing() {
    let Scene { tree, list, .. } = scene(2000.0);
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.move_to(195.0, 450.0);
    robot.move_by(0.0, 60.0);
    robot.move_by(40.0, -30.0);
    assert!(robot.changes().is_empty());
    assert!(!robot.gesture().is_active());
    assert_eq!(robot.gesture().tracked_container(), None);
    assert_eq!(list.offset(), Point::ZERO);

    robot.down(195.0, 500.0);
    robot.drag_to((195.0, 540.0), 4);
    robot.up();
    assert_size_approx_eq(robot.reported_translation(), Size::new(0.0, 40.0), 0.01, "sheet");
}

#[test]
fn ignoring_scroll_views_rejects_the_list_pan() {
    let Scene { tree, .. } = scene(2000.0);
    let configuration = Configuration::default().with_ignores_scroll_view(true);
    let mut robot = GestureRobot::new(tree, configuration);
    robot.down(195.0, 500.0);

    assert!(!robot
        .gesture()
        .should_recognize_simultaneously(&RecognizerInfo::scroll_pan(ViewId(2))));
}

#[test]
fn location_is_reported_in_the_sheet_space() {
    let Scene { tree, .. } = scene(2000.0);
    let mut robot = GestureRobot::with_options(
        tree,
        Configuration::default(),
        ScrollLock::default(),
        CoordinateSpace::named("sheet"),
    );
    robot.gesture_mut().coordinate_spaces_mut().insert("sheet", SHEET);

    robot.drag((195.0, 500.0), (195.0, 550.0), 5);

    let end = robot.last_end().expect("gesture ended");
    assert_point_approx_eq(end.location, Point::new(195.0, 350.0), 0.01, "location");
}

#[test]
fn removed_container_hands_both_axes_to_the_drag() {
    let Scene { tree, list, .. } = scene(2000.0);
    list.scroll_to_offset(Point::new(0.0, 300.0));
    let mut robot = GestureRobot::new(tree, Configuration::default());

    robot.down(195.0, 500.0);
    robot.drag_to((195.0, 530.0), 3);
    assert!(robot.changes().is_empty());

    robot.tree_mut().remove(2);
    drop(list);
    robot.move_by(10.0, 10.0);
    robot.up();

    assert_size_approx_eq(robot.reported_translation(), Size::new(10.0, 10.0), 0.01, "sheet");
}
