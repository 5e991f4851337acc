//! Modal pointer interactions.
//!
//! A drag or resize owns all pointer motion from its pointer-down until the
//! matching pointer-up. The manager keeps at most one `Interaction` at a
//! time across all windows; these types only capture where the interaction
//! started and compute the geometry for the next pointer position.

use crate::geometry::{Geometry, Point, apply_drag, apply_resize};

use super::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub id: WindowId,
    /// Pointer position relative to the window origin at pointer-down.
    pub offset: Point,
    pub start: Geometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeState {
    pub id: WindowId,
    pub anchor: Point,
    pub start: Geometry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Dragging(DragState),
    Resizing(ResizeState),
}

impl Interaction {
    pub fn drag(id: WindowId, start: Geometry, pointer: Point) -> Self {
        Self::Dragging(DragState {
            id,
            offset: Point::new(
                pointer.x.saturating_sub(start.x),
                pointer.y.saturating_sub(start.y),
            ),
            start,
        })
    }

    pub fn resize(id: WindowId, start: Geometry, pointer: Point) -> Self {
        Self::Resizing(ResizeState {
            id,
            anchor: pointer,
            start,
        })
    }

    pub fn target(&self) -> WindowId {
        match self {
            Self::Dragging(drag) => drag.id,
            Self::Resizing(resize) => resize.id,
        }
    }

    pub fn start_geometry(&self) -> Geometry {
        match self {
            Self::Dragging(drag) => drag.start,
            Self::Resizing(resize) => resize.start,
        }
    }

    pub fn is_drag(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    /// Geometry for the window once the pointer reaches `pointer`.
    pub fn apply(&self, pointer: Point, min_width: u32, min_height: u32) -> Geometry {
        match self {
            Self::Dragging(drag) => apply_drag(drag.start, drag.offset, pointer),
            Self::Resizing(resize) => {
                apply_resize(resize.start, resize.anchor, pointer, min_width, min_height)
            }
        }
    }
}
