//! Testing utilities and harness for sheetdrag

pub mod assertions;
pub mod robot;
pub mod scroll_view;
pub mod view_tree;

pub use robot::{GestureRobot, FRAME_MS};
pub use scroll_view::FakeScrollView;
pub use view_tree::FakeViewTree;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::robot::*;
    pub use crate::scroll_view::FakeScrollView;
    pub use crate::view_tree::FakeViewTree;
}
