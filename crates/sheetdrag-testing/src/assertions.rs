//! Tolerance-based assertions for drag values.
//!
//! Translations and locations pass through float arithmetic (per-step deltas,
//! coordinate space offsets), so scenario tests compare them approximately.

use sheetdrag_ui_graphics::{Point, Size};

/// Asserts `actual` lies within `tolerance` of `expected`.
#[track_caller]
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{msg}: expected {expected} (±{tolerance}), got {actual} (diff: {diff})"
    );
}

/// Compares two-component values, naming the first component that drifts.
#[track_caller]
fn assert_pair_approx_eq<T: std::fmt::Debug>(
    actual: (T, [(&str, f32); 2]),
    expected: (T, [f32; 2]),
    tolerance: f32,
    msg: &str,
) {
    let (actual_value, components) = actual;
    let (expected_value, expected_components) = expected;
    for ((name, got), want) in components.into_iter().zip(expected_components) {
        if (got - want).abs() > tolerance {
            panic!(
                "{msg}: {name} expected {want} (±{tolerance}), got {got} \
                 (whole value {actual_value:?}, expected {expected_value:?})"
            );
        }
    }
}

#[track_caller]
pub fn assert_size_approx_eq(actual: Size, expected: Size, tolerance: f32, msg: &str) {
    assert_pair_approx_eq(
        (actual, [("width", actual.width), ("height", actual.height)]),
        (expected, [expected.width, expected.height]),
        tolerance,
        msg,
    );
}

#[track_caller]
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_pair_approx_eq(
        (actual, [("x", actual.x), ("y", actual.y)]),
        (expected, [expected.x, expected.y]),
        tolerance,
        msg,
    );
}
