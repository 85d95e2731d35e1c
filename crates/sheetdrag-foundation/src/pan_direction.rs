//! Per-event pan direction derived from a cumulative translation stream.

use bitflags::bitflags;
use sheetdrag_ui_graphics::Point;

bitflags! {
    /// Direction of the finger's movement since the previous event. At most
    /// one bit per axis is ever set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PanDirection: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl PanDirection {
    /// Classifies an incremental delta. A zero component contributes no bit.
    pub fn from_delta(delta: Point) -> Self {
        let mut direction = PanDirection::empty();

        if delta.y > 0.0 {
            direction |= PanDirection::DOWN;
        } else if delta.y < 0.0 {
            direction |= PanDirection::UP;
        }

        if delta.x > 0.0 {
            direction |= PanDirection::RIGHT;
        } else if delta.x < 0.0 {
            direction |= PanDirection::LEFT;
        }

        direction
    }
}

/// Result of one [`PanDirectionDetector::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PanStep {
    pub direction: PanDirection,
    pub delta: Point,
}

/// Diffs each cumulative translation against the previous one.
#[derive(Clone, Debug, Default)]
pub struct PanDirectionDetector {
    previous_translation: Point,
}

impl PanDirectionDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous translation. Called when a new gesture starts.
    pub fn reset(&mut self) {
        self.previous_translation = Point::ZERO;
    }

    pub fn previous_translation(&self) -> Point {
        self.previous_translation
    }

    /// Consumes the next cumulative translation and returns the increment
    /// since the last call.
    pub fn advance(&mut self, translation: Point) -> PanStep {
        let delta = translation - self.previous_translation;
        self.previous_translation = translation;
        PanStep {
            direction: PanDirection::from_delta(delta),
            delta,
        }
    }
}
