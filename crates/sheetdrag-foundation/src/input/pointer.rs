use sheetdrag_ui_graphics::Point;

pub type PointerId = u64;

/// The first touch / primary mouse button.
pub const PRIMARY_POINTER: PointerId = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer input as delivered by the host, in global coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic event time in milliseconds, used for velocity estimation.
    pub uptime_ms: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime_ms: u64) -> Self {
        Self {
            id: PRIMARY_POINTER,
            kind,
            position,
            uptime_ms,
        }
    }

    pub fn down(position: Point, uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Down, position, uptime_ms)
    }

    pub fn moved(position: Point, uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Move, position, uptime_ms)
    }

    pub fn up(position: Point, uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Up, position, uptime_ms)
    }

    pub fn cancel(position: Point, uptime_ms: u64) -> Self {
        Self::new(PointerEventKind::Cancel, position, uptime_ms)
    }

    /// Attributes the event to another pointer.
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
