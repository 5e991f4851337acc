//! The host-side half of a window.
//!
//! The window manager never draws anything itself. Every visible effect of a
//! state change is pushed through a `RenderSurface`, so the same state
//! machine drives a terminal, a test recorder, or any other host.

pub mod headless;

pub use headless::{HeadlessContent, HeadlessPane, HeadlessSurface};

use thiserror::Error;

use crate::geometry::{DisplayArea, Geometry};
use crate::window::WindowId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("no render target is attached")]
    TargetMissing,

    #[error("{0} already has a surface")]
    DuplicateSurface(WindowId),
}

/// Content hosted inside a window.
///
/// Content with an embedded region (a nested frame, an interactive
/// sub-application) can grab pointer input while the pointer crosses it, so
/// the manager switches its pointer handling off during drags and resizes.
pub trait RenderableContent {
    fn has_embedded_region(&self) -> bool {
        false
    }
}

impl RenderableContent for String {}
impl RenderableContent for &str {}
impl RenderableContent for () {}

pub trait RenderSurface {
    type Content: RenderableContent;

    /// Build the visual representation of a new window and attach `content`.
    /// Must fail without side effects when there is nowhere to render.
    fn create(
        &mut self,
        id: WindowId,
        title: &str,
        content: Self::Content,
    ) -> Result<(), SurfaceError>;

    fn show(&mut self, id: WindowId);

    fn hide(&mut self, id: WindowId);

    fn remove(&mut self, id: WindowId);

    fn set_bounds(&mut self, id: WindowId, bounds: Geometry);

    fn set_z(&mut self, id: WindowId, z: u64);

    /// Toggle the "active window" marker (title bar highlight).
    fn set_active(&mut self, id: WindowId, active: bool);

    /// Allow or block pointer events on the window's embedded region.
    fn set_pointer_events(&mut self, id: WindowId, enabled: bool);

    /// Area available to windows, or `None` when no target is attached.
    fn display_area(&self) -> Option<DisplayArea>;
}
