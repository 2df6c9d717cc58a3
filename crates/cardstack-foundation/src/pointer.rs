use cardstack_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer sample in the stack's local coordinates.
///
/// `time_ms` is the host's event timestamp; only differences between samples
/// matter, so any monotonic origin works.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            kind,
            position,
            time_ms,
        }
    }

    pub fn down(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y), time_ms)
    }

    pub fn moved(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y), time_ms)
    }

    pub fn up(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y), time_ms)
    }

    pub fn cancel(x: f32, y: f32, time_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y), time_ms)
    }
}
