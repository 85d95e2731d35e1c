//! Pointer input: events, hit-testing, recognition and cooperation policy.

mod hit_test;
mod pointer;
mod recognizer;
mod simultaneous;

pub use hit_test::{ancestor_path, find_scroll_container, ContainerSelection, ViewHierarchy};
pub use pointer::{PointerEvent, PointerEventKind, PointerId, PRIMARY_POINTER};
pub use recognizer::{DragGestureRecognizer, RecognizerError, RecognizerState};
pub use simultaneous::{should_recognize_simultaneously, RecognizerInfo, RecognizerKind};
