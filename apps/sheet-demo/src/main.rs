mod scene;

use scene::{Screen, Sheet, LIST_ID};
use sheetdrag_foundation::prelude::*;
use std::rc::Rc;

const FRAME_MS: u64 = 16;

/// Plays a straight drag from `from` to `to`, letting the list pan natively
/// wherever the gesture leaves it free.
fn drag(
    gesture: &mut InteroperableDragGesture,
    screen: &Screen,
    clock: &mut u64,
    from: Point,
    to: Point,
    steps: usize,
) {
    *clock += FRAME_MS;
    gesture.handle_pointer_event(&PointerEvent::down(from, *clock), screen);

    let mut position = from;
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        let next = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
        *clock += FRAME_MS;
        gesture.handle_pointer_event(&PointerEvent::moved(next, *clock), screen);
        if gesture.tracked_container() == Some(LIST_ID)
            && gesture.should_recognize_simultaneously(&RecognizerInfo::scroll_pan(LIST_ID))
        {
            screen.list.pan(next - position);
        }
        position = next;
    }

    *clock += FRAME_MS;
    gesture.handle_pointer_event(&PointerEvent::up(to, *clock), screen);
}

fn report(label: &str, screen: &Screen, sheet: &Sheet) {
    println!(
        "{label:<28} list offset {:>6.1}  sheet offset {:>6.1}  dismissed {}",
        screen.list.content_offset().y,
        sheet.offset(),
        sheet.is_dismissed()
    );
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== sheetdrag: bottom sheet over a scrolling list ===");
    println!("Set RUST_LOG=sheetdrag_foundation=debug to follow the arbitration.");
    println!();

    let screen = Screen::new(40);
    let sheet = Rc::new(Sheet::default());

    let mut gesture = InteroperableDragGesture::new(
        Configuration::default().with_target_edges(EdgeSet::TOP),
        ScrollLock::default(),
        CoordinateSpace::named("sheet"),
        {
            let sheet = sheet.clone();
            move |value| sheet.follow(value)
        },
        {
            let sheet = sheet.clone();
            move |value| sheet.settle(value)
        },
    )
    .with_coordinate_spaces(CoordinateSpaces::new().with_space("sheet", screen.sheet_frame()));

    // (label, from y, to y, steps) along the middle of the screen.
    let script = [
        ("swipe up: list scrolls", 700.0, 400.0, 15),
        ("pull down: list scrolls back", 400.0, 500.0, 10),
        ("pull down again: list at top", 400.0, 700.0, 15),
        ("slow pull from the top", 400.0, 480.0, 20),
        ("fast pull from the top", 400.0, 600.0, 5),
    ];

    let mut clock = 0;
    report("start", &screen, &sheet);
    for (label, from, to, steps) in script {
        let (from, to) = (Point::new(195.0, from), Point::new(195.0, to));
        drag(&mut gesture, &screen, &mut clock, from, to, steps);
        report(label, &screen, &sheet);
    }
}
