//! Scroll-view interoperable drag gesture.

mod arbitration;
mod configuration;
mod interoperable;
mod value;

pub use arbitration::{GestureArbiter, Tracking};
pub use configuration::{Configuration, ScrollLock};
pub use interoperable::InteroperableDragGesture;
pub use value::{DragValue, GestureEvent, GesturePhase};
