use crate::constants::{RESIZE_GRIP_SIZE, TITLE_BAR_HEIGHT, TITLE_BUTTON_WIDTH};
use crate::geometry::{Geometry, Point};

/// Part of a window's chrome under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Minimize,
    Maximize,
    Close,
    TitleBar,
    ResizeGrip,
    Content,
    Outside,
}

/// Sizes of the title bar, its buttons and the resize grip.
///
/// The three buttons sit flush against the right end of the title bar in
/// minimize, maximize, close order. The grip is the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeMetrics {
    pub title_bar_height: u32,
    pub button_width: u32,
    pub grip_width: u32,
    pub grip_height: u32,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            title_bar_height: TITLE_BAR_HEIGHT,
            button_width: TITLE_BUTTON_WIDTH,
            grip_width: RESIZE_GRIP_SIZE,
            grip_height: RESIZE_GRIP_SIZE,
        }
    }
}

impl ChromeMetrics {
    /// Chrome for a host that draws on a character grid: a one-row title bar,
    /// three-column buttons and a two-column grip on the bottom row.
    pub fn for_cells(cell_width: u32, cell_height: u32) -> Self {
        Self {
            title_bar_height: cell_height,
            button_width: cell_width.saturating_mul(3),
            grip_width: cell_width.saturating_mul(2),
            grip_height: cell_height,
        }
    }

    pub fn title_bar(&self, window: Geometry) -> Geometry {
        Geometry {
            height: self.title_bar_height.min(window.height),
            ..window
        }
    }

    /// Minimize, maximize and close button rectangles, left to right.
    pub fn buttons(&self, window: Geometry) -> [Geometry; 3] {
        let bar = self.title_bar(window);
        let width = self.button_width as i64;
        let right = bar.right();
        let at = |slot: i64| Geometry {
            x: clamp_i32(right - width * slot),
            y: bar.y,
            width: self.button_width,
            height: bar.height,
        };
        [at(3), at(2), at(1)]
    }

    pub fn resize_grip(&self, window: Geometry) -> Geometry {
        let width = self.grip_width.min(window.width);
        let height = self.grip_height.min(window.height);
        Geometry {
            x: clamp_i32(window.right() - width as i64),
            y: clamp_i32(window.bottom() - height as i64),
            width,
            height,
        }
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

pub trait WindowDecorator: std::fmt::Debug {
    fn metrics(&self) -> ChromeMetrics;

    fn hit_test(&self, window: Geometry, point: Point) -> HitRegion {
        if !window.contains(point) {
            return HitRegion::Outside;
        }
        let metrics = self.metrics();
        let [minimize, maximize, close] = metrics.buttons(window);
        if close.contains(point) {
            return HitRegion::Close;
        }
        if maximize.contains(point) {
            return HitRegion::Maximize;
        }
        if minimize.contains(point) {
            return HitRegion::Minimize;
        }
        if metrics.title_bar(window).contains(point) {
            return HitRegion::TitleBar;
        }
        if metrics.resize_grip(window).contains(point) {
            return HitRegion::ResizeGrip;
        }
        HitRegion::Content
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDecorator {
    metrics: ChromeMetrics,
}

impl DefaultDecorator {
    pub fn new(metrics: ChromeMetrics) -> Self {
        Self { metrics }
    }
}

impl WindowDecorator for DefaultDecorator {
    fn metrics(&self) -> ChromeMetrics {
        self.metrics
    }
}
