//! Shared gesture constants for pointer handling.
//!
//! Values are in logical pixels (and logical pixels per second for
//! velocities). Hosts on high-density touch screens may want to scale the
//! slop by the device's density before constructing a recognizer.

/// Drag threshold in logical pixels.
///
/// A pointer has to travel further than this from its touch-down position
/// before the drag recognizer leaves `Possible` and reports `Began`. A
/// release before that point fails the gesture without any callbacks.
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum reported velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
