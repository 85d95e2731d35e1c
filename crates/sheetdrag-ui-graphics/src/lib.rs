//! Pure geometry data for sheetdrag
//!
//! Points, sizes, rectangles and insets shared by the gesture machinery,
//! the test harness and host integrations.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
