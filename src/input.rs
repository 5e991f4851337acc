//! Host-neutral pointer events, in the same logical pixels as window geometry.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down(PointerButton),
    Up(PointerButton),
    /// Motion with a button held.
    Drag,
    /// Motion with no button held.
    Moved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }

    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Down(PointerButton::Primary), x, y)
    }

    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Up(PointerButton::Primary), x, y)
    }

    pub const fn drag(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Drag, x, y)
    }

    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Moved, x, y)
    }
}
