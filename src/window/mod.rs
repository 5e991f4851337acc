pub mod decorator;
pub mod embedded;
pub mod interaction;

mod window_manager;

use std::fmt;

use crate::geometry::Geometry;

pub use decorator::{ChromeMetrics, DefaultDecorator, HitRegion, WindowDecorator};
pub use embedded::EmbeddedContentGuard;
pub use interaction::{DragState, Interaction, ResizeState};
pub use window_manager::WindowManager;

/// Opaque window identity. Allocated from a counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// What callers get back from `create_window`; everything else is addressed
/// through the manager by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle(WindowId);

impl WindowHandle {
    pub fn id(&self) -> WindowId {
        self.0
    }
}

impl From<WindowId> for WindowHandle {
    fn from(id: WindowId) -> Self {
        Self(id)
    }
}

/// Placement and initial state for a new window. Anything left unset falls
/// back to the manager's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowOptions {
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn minimized(mut self, minimized: bool) -> Self {
        self.minimized = minimized;
        self
    }

    pub fn maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    id: WindowId,
    title: String,
    geometry: Geometry,
    saved_geometry: Option<Geometry>,
    state: WindowState,
    z_order: u64,
    embedded: bool,
}

impl WindowRecord {
    fn new(id: WindowId, title: String, geometry: Geometry, embedded: bool) -> Self {
        Self {
            id,
            title,
            geometry,
            saved_geometry: None,
            state: WindowState::Normal,
            z_order: 0,
            embedded,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Geometry captured right before the window was maximized.
    pub fn saved_geometry(&self) -> Option<Geometry> {
        self.saved_geometry
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn z_order(&self) -> u64 {
        self.z_order
    }

    pub fn has_embedded_region(&self) -> bool {
        self.embedded
    }

    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.state == WindowState::Maximized
    }
}
