//! Window placement math.
//!
//! Everything here is pure: the window manager owns the records and calls
//! into these helpers to compute the next geometry for a move, resize,
//! cascade or maximize.

/// A pointer position or window origin in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Signed origin with unsigned size, so windows may hang off the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// The region of the host that windows are laid out in.
pub type DisplayArea = Geometry;

impl Geometry {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn contains(&self, point: Point) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let (px, py) = (point.x as i64, point.y as i64);
        px >= self.x as i64 && px < self.right() && py >= self.y as i64 && py < self.bottom()
    }

    /// Grow each dimension up to its minimum.
    pub fn clamp_size(self, min_width: u32, min_height: u32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
            ..self
        }
    }

    /// Keep the top edge (and with it the title bar) below the host's top.
    pub fn clamp_top(self) -> Self {
        Self {
            y: self.y.max(0),
            ..self
        }
    }
}

/// Default origin for the `count`-th window: each open window pushes the
/// next one a step down and to the right.
pub fn cascade_origin(origin: i32, step: i32, count: usize) -> Point {
    let n = i32::try_from(count).unwrap_or(i32::MAX);
    let offset = origin.saturating_add(step.saturating_mul(n));
    Point::new(offset, offset)
}

/// Full-bleed placement inside `area`, inset by `margin` horizontally and at
/// the bottom. The top edge stays flush with the area.
pub fn maximized_geometry(
    area: DisplayArea,
    margin: u32,
    min_width: u32,
    min_height: u32,
) -> Geometry {
    let inset = i32::try_from(margin).unwrap_or(i32::MAX);
    Geometry {
        x: area.x.saturating_add(inset),
        y: area.y,
        width: area.width.saturating_sub(margin.saturating_mul(2)),
        height: area.height.saturating_sub(margin.saturating_mul(2)),
    }
    .clamp_size(min_width, min_height)
    .clamp_top()
}

/// Move `start` so that the pointer keeps the same `offset` from the
/// window's origin. Only the vertical axis is clamped.
pub fn apply_drag(start: Geometry, offset: Point, pointer: Point) -> Geometry {
    Geometry {
        x: pointer.x.saturating_sub(offset.x),
        y: pointer.y.saturating_sub(offset.y),
        ..start
    }
    .clamp_top()
}

/// Grow or shrink `start` from its fixed top-left corner by the pointer's
/// travel since `anchor`.
pub fn apply_resize(
    start: Geometry,
    anchor: Point,
    pointer: Point,
    min_width: u32,
    min_height: u32,
) -> Geometry {
    let dx = pointer.x as i64 - anchor.x as i64;
    let dy = pointer.y as i64 - anchor.y as i64;
    let width = (start.width as i64 + dx).clamp(min_width as i64, u32::MAX as i64);
    let height = (start.height as i64 + dy).clamp(min_height as i64, u32::MAX as i64);
    Geometry {
        width: width as u32,
        height: height as u32,
        ..start
    }
    .clamp_top()
}
